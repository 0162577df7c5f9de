#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use colored::Colorize;
use scaffold_picker::{
    cli, config::Config, core::DialoguerPrompter, setup_logging, utils::install_interrupt_handler,
};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Ctrl-C at a prompt must end the run as an abort, not kill it
    install_interrupt_handler()?;

    let config = Config::from_args(&args);
    let mut prompter = DialoguerPrompter::new();
    let runner = config.process_runner();

    match cli::execute(&mut prompter, &runner) {
        Ok(outcome) => Ok(cli::report(&outcome)),
        Err(e) => {
            eprintln!("{}", format!("Error: {e:#}").red());
            Ok(ExitCode::FAILURE)
        }
    }
}
