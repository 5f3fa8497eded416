//! EcoIndex CLI entry point

use anyhow::Result;
use clap::Parser;
use ecoindex::cli;

fn main() -> Result<()> {
    // Parse CLI args, initialize logging and run
    let cli = cli::Cli::parse();
    cli::init_logging(&cli.log_level);
    cli::run(cli)
}
