//! Domain layer: game rules and arithmetic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arithmetic;
pub mod error;
pub mod game;

pub use arithmetic::{divide, ArithmeticError};
pub use error::{DomainError, DomainResult};
pub use game::{Feedback, Game, GameState, GuessRange};
