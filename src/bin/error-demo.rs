use clap::Parser;
use stdio_demos::cli::commands::execute_error_demo;
use stdio_demos::cli::logging::setup_logging;
use stdio_demos::cli::ErrorDemoArgs;
use stdio_demos::exitcode;

fn main() {
    let args = ErrorDemoArgs::parse();
    setup_logging(args.common.debug);

    execute_error_demo(&args);
    std::process::exit(exitcode::OK);
}
