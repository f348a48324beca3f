//! Application layer: the two programs as use cases
//!
//! This layer drives domain logic over generic readers and writers.

pub mod error;
pub mod error_demo;
pub mod error_ext;
pub mod guessing;
pub mod transcript;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use guessing::play;
pub use transcript::{Line, Stream, Transcript};
