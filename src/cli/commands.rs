//! Command dispatch for both binaries

use std::io::{self, Write};

use clap::{Command, CommandFactory};
use clap_complete::{generate, Shell};
use tracing::{debug, instrument, warn};

use crate::application::error_demo;
use crate::application::play;
use crate::cli::args::{ConfigCommands, ErrorDemoArgs, ErrorDemoCommands, GuessArgs, GuessCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{global_config_path, Settings};
use crate::domain::Game;

pub fn execute_guess(args: &GuessArgs) -> CliResult<()> {
    match &args.command {
        None => guess(args),
        Some(GuessCommands::Config { command }) => config(args, command),
        Some(GuessCommands::Completion { shell }) => {
            completion(*shell, &mut GuessArgs::command());
            Ok(())
        }
    }
}

/// Run the error demo. Never fails: output errors are logged and swallowed.
pub fn execute_error_demo(args: &ErrorDemoArgs) {
    match &args.command {
        None => demo(),
        Some(ErrorDemoCommands::Completion { shell }) => {
            completion(*shell, &mut ErrorDemoArgs::command())
        }
    }
}

#[instrument(skip_all)]
fn guess(args: &GuessArgs) -> CliResult<()> {
    let settings = Settings::load_from(args.config.as_deref())?;
    let range = settings.guess_range()?;
    debug!("guess: range={}", range);

    let mut game = Game::with_range(range);
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut game, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn config(args: &GuessArgs, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load_from(args.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            output::header("Config paths");
            match global_config_path() {
                Some(path) => output::info(&format!("global:   {}", path.display())),
                None => output::info("global:   (no home directory)"),
            }
            if let Some(path) = &args.config {
                output::info(&format!("explicit: {}", path.display()));
            }
        }
    }
    Ok(())
}

#[instrument]
fn demo() {
    let transcript = error_demo::run();
    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(e) = transcript.emit(&mut stdout.lock(), &mut stderr.lock()) {
        warn!("demo: {}", e);
    }
}

fn completion(shell: Shell, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    let mut stdout = io::stdout();
    generate(shell, cmd, name, &mut stdout);
    if let Err(e) = stdout.flush() {
        warn!("completion: flush failed: {}", e);
    }
}
