use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mend::commands::{rules, tools, watch};
use mend::models::Authority;

#[derive(Parser)]
#[command(name = "mend")]
#[command(about = "File-watching auto-fix daemon", long_about = None)]
#[command(version)]
struct Cli {
    /// Workspace root to watch (default: $CODE_AGENT_ROOT, else the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Authority level gating heuristic repair on command failure
    #[arg(long, value_enum)]
    authority: Option<Authority>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective extension rule table
    Rules,

    /// Check which configured tools are installed on PATH
    Tools,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Rules) => rules::execute(cli.root),
        Some(Commands::Tools) => tools::execute(cli.root),
        None => watch::execute(cli.root, cli.authority),
    }
}
