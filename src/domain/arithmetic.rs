//! Checked integer arithmetic

use thiserror::Error;

/// Failure of an integer division.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,
}

/// Divide `numerator` by `denominator`, reporting failure as a value instead of a panic.
pub fn divide(numerator: i64, denominator: i64) -> Result<i64, ArithmeticError> {
    if denominator == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    // i64::MIN / -1 is the only other failing case
    numerator
        .checked_div(denominator)
        .ok_or(ArithmeticError::Overflow)
}
