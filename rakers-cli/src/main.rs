//! rakers command-line entry point

use clap::Parser;
use rakers_cli::commands::Commands;

/// Rapid automatic keyword extraction from text files
#[derive(Debug, Parser)]
#[command(name = "rakers", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
