mod cli;
mod config;
mod convert;
mod logging;
mod model_cmd;
mod report;
mod smooth_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Arima(args) => model_cmd::run_arima(args),
        Command::Arma(args) => model_cmd::run_arma(args),
        Command::Ema(args) => smooth_cmd::run_ema(args),
        Command::Wma(args) => smooth_cmd::run_wma(args),
    }
}
