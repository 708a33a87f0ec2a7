use clap::Parser;
use wordnum_cli::commands::Commands;

/// Convert spelled-out English numbers in text into digits
#[derive(Debug, Parser)]
#[command(name = "wordnum", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
