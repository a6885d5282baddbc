use clap::Parser;
use debugharvest::{Cli, DebugHarvest, HarvestError, OutputFormatter};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    let harvest = match DebugHarvest::from_cli(&cli) {
        Ok(harvest) => harvest,
        Err(e) => {
            print_startup_error(&cli, &e);
            return exit_code_for(&e);
        }
    };

    match harvest.run() {
        Ok(_) => 0,
        Err(e) => {
            harvest.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &HarvestError) -> i32 {
    match error {
        HarvestError::Config { .. } | HarvestError::InvalidSelector { .. } => 2,
        HarvestError::MissingInputPath { .. } => 3,
        HarvestError::MissingOutputPath { .. } => 4,
        HarvestError::NotADirectory { .. } => 5,
        _ => 1,
    }
}

fn print_startup_error(cli: &Cli, error: &HarvestError) {
    let formatter = OutputFormatter::new(cli.output_mode(), 0, false);
    formatter.print_user_friendly_error(error);
}
