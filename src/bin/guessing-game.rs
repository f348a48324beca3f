use clap::Parser;
use stdio_demos::cli::commands::execute_guess;
use stdio_demos::cli::logging::setup_logging;
use stdio_demos::cli::{output, GuessArgs};

fn main() {
    let args = GuessArgs::parse();
    setup_logging(args.common.debug);

    if let Err(e) = execute_guess(&args) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}
