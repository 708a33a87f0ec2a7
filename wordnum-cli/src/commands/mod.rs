//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod list;
pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace spelled-out numbers in a text file with digits
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List recognized number, scale, and adder words
    Words,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                match subcommand {
                    ListCommands::Words => list::write_words(&mut out),
                    ListCommands::Formats => list::write_formats(&mut out),
                }
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
