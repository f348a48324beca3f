//! CLI layer: argument parsing, logging setup and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

pub use args::{ErrorDemoArgs, GuessArgs};
pub use error::{CliError, CliResult};
