//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent rule violations of the game itself.
/// These are independent of I/O and configuration concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid guess range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("game is already won")]
    GameOver,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
