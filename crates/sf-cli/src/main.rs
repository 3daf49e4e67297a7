//! Silverflow CLI - full-refresh bronze to silver batch

use clap::Parser;
use std::process;

mod cli;
mod commands;
mod logging;

use cli::Cli;
use commands::common::ExitCode;
use commands::{ls, run};

#[tokio::main]
async fn main() -> process::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let result = match &cli.command {
        cli::Commands::Run(args) => run::execute(args, &cli.global).await,
        cli::Commands::Ls(args) => ls::execute(args, &cli.global).await,
    };

    match result {
        Ok(()) => process::ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ExitCode>() {
            Some(code) => process::ExitCode::from(code.0),
            None => {
                eprintln!("Error: {:#}", err);
                process::ExitCode::FAILURE
            }
        },
    }
}
