use clap::Parser;
use lsbhide_core::LsbError;

mod cli;
mod commands;
mod progress_bar;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, LsbError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Hide(hide) => hide.run(),
        Commands::Solve(solve) => solve.run(),
        Commands::Capacity(capacity) => capacity.run(),
    }
}
