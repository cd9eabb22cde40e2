mod cli;
mod error;
mod input;
mod inspect;
mod report;

use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use env_logger::Target;
use log::LevelFilter;

use crate::cli::Cli;
use crate::cli::Commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Report(args) => report::run(args),
        Commands::Inspect(args) => inspect::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
