//! Print the effective extension rule table.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::commands::watch::resolve_root;
use crate::config;
use crate::runner;

/// Execute the rules command.
///
/// Shows built-ins merged with any `mend.toml` overrides found at the root.
/// Templates that receive the changed file's path are marked with `<file>`.
pub fn execute(root_flag: Option<PathBuf>) -> Result<()> {
    let root = resolve_root(root_flag)?;
    let file_config = config::load(&root).context("failed to load mend.toml")?;
    let rules =
        config::effective_rules(file_config.as_ref()).context("invalid rules in mend.toml")?;

    println!("{}", "Extension rules".bold());
    println!("{}", "─".repeat(40).dimmed());

    for extension in rules.extensions() {
        println!();
        println!("{}", extension.bold());
        for template in rules.templates_for(extension).unwrap_or(&[]) {
            if runner::wants_path_argument(extension, template.program()) {
                println!("  {} {}", template.display_line(), "<file>".dimmed());
            } else {
                println!("  {}", template.display_line());
            }
        }
    }

    Ok(())
}
