//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Flags shared by both programs
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Increase log verbosity on stderr (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,
}

/// Guess the secret number between the configured bounds
#[derive(Parser, Debug)]
#[command(name = "guessing-game")]
#[command(author, version, about, long_about = None)]
pub struct GuessArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Config file layered over the global config
    #[arg(short, long, env = "STDIO_DEMOS_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<GuessCommands>,
}

#[derive(Subcommand, Debug)]
pub enum GuessCommands {
    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print a commented config template
    Template,

    /// Show config paths
    Path,
}

/// Divide by zero, report the error on stderr and carry on
#[derive(Parser, Debug)]
#[command(name = "error-demo")]
#[command(author, version, about, long_about = None)]
pub struct ErrorDemoArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<ErrorDemoCommands>,
}

#[derive(Subcommand, Debug)]
pub enum ErrorDemoCommands {
    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
