//! Report which configured tools are installed.
//!
//! The watch loop deliberately skips missing tools without a word; this
//! command is the place to find out what would actually run.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::commands::watch::resolve_root;
use crate::config;

/// Execute the tools command.
pub fn execute(root_flag: Option<PathBuf>) -> Result<()> {
    let root = resolve_root(root_flag)?;
    let file_config = config::load(&root).context("failed to load mend.toml")?;
    let rules =
        config::effective_rules(file_config.as_ref()).context("invalid rules in mend.toml")?;

    println!("{}", "Configured tools".bold());
    println!("{}", "─".repeat(40).dimmed());

    let programs = rules.programs();
    let mut available = 0;

    for program in &programs {
        match which::which(program) {
            Ok(path) => {
                available += 1;
                println!(
                    "  {} {} {}",
                    "✓".green(),
                    program,
                    format!("({})", path.display()).dimmed()
                );
            }
            Err(_) => {
                println!("  {} {} {}", "✗".red(), program, "not found on PATH".dimmed());
            }
        }
    }

    println!();
    println!(
        "{} {} of {} tools available",
        "Summary:".bold(),
        available,
        programs.len()
    );

    Ok(())
}
