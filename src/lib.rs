//! Two small stdio programs sharing one library:
//! a number-guessing loop and an error-handling demo.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{ApplicationError, ApplicationResult};
pub use domain::{DomainError, Feedback, Game, GuessRange};
