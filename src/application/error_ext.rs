//! Error conversion helpers for stream I/O
//!
//! Provides an extension trait for attaching context to `io::Result`.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add a description of the failed action to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(output, "{}", line).io_context("write prompt")?;
    /// ```
    fn io_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn io_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Io {
            context: action.to_string(),
            source,
        })
    }
}
