//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use rakers_core::{MODIFIER_NAMES, SORTER_NAMES};

pub mod extract;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract scored key phrases from text files or standard input
    Extract(extract::ExtractArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List built-in candidate modifiers
    Modifiers,

    /// List built-in sorters
    Sorters,
}

impl ListCommands {
    /// Names printed by this subcommand
    pub fn names(self) -> &'static [&'static str] {
        match self {
            ListCommands::Modifiers => &MODIFIER_NAMES,
            ListCommands::Sorters => &SORTER_NAMES,
        }
    }
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::List { subcommand } => {
                for name in subcommand.names() {
                    println!("{name}");
                }
                Ok(())
            }
        }
    }
}
