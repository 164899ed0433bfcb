//! fwpack CLI - ESP8266 ROM bootloader firmware packing utility.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fwpack=warn".parse().unwrap()))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let Some(operation) = cli.operation.as_ref() else {
        let _ = Cli::command().print_help();
        return ExitCode::from(1);
    };

    match commands::run(&cli, operation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\nA fatal error occurred: {e}");
            ExitCode::from(2)
        }
    }
}
