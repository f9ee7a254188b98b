//! Watch mode — the default behavior of `mend`.
//!
//! Resolves the watch root and authority level, starts the filesystem
//! watcher bound to the dispatcher, then sleeps until interrupted.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::{self, FileConfig};
use crate::dispatch::Dispatcher;
use crate::models::Authority;
use crate::rules::RuleSet;
use crate::watcher;

/// Fallback root when `--root` is not given.
pub const ROOT_ENV_VAR: &str = "CODE_AGENT_ROOT";

const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Execute watch mode until an interrupt signal arrives.
pub fn execute(root_flag: Option<PathBuf>, authority_flag: Option<Authority>) -> Result<()> {
    let root = resolve_root(root_flag)?;
    let file_config = config::load(&root).context("failed to load mend.toml")?;
    let authority = resolve_authority(authority_flag, file_config.as_ref());
    let rules =
        config::effective_rules(file_config.as_ref()).context("invalid rules in mend.toml")?;

    print_banner(authority, &root, &rules);

    let dispatcher = Arc::new(Dispatcher::new(rules, authority));
    let _watcher = watcher::spawn(&root, dispatcher)?;

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    ctrlc::set_handler(move || handler_flag.store(false, Ordering::SeqCst))
        .context("failed to install interrupt handler")?;

    // Lifecycle only: event handling happens on the watcher's thread
    while running.load(Ordering::SeqCst) {
        thread::sleep(POLL_INTERVAL);
    }

    println!();
    println!("{} Standing down...", "[mend]".bold());
    Ok(())
}

/// Resolve the watch root: `--root` flag, else `$CODE_AGENT_ROOT`, else the
/// current directory. Canonicalized so logs and commands see absolute paths.
pub fn resolve_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    let root = flag
        .or_else(|| std::env::var_os(ROOT_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    root.canonicalize()
        .with_context(|| format!("watch root does not exist: {}", root.display()))
}

/// Resolve the authority level: flag beats config file beats the ABSOLUTE
/// default.
pub fn resolve_authority(flag: Option<Authority>, config: Option<&FileConfig>) -> Authority {
    flag.or_else(|| config.and_then(|c| c.authority))
        .unwrap_or_default()
}

fn print_banner(authority: Authority, root: &Path, rules: &RuleSet) {
    println!();
    println!(
        "{} — {} authority",
        "mend".cyan().bold(),
        authority.to_string().bold()
    );
    println!("{} {}", "Watching:".bold(), root.display());
    println!(
        "{} {} extensions configured",
        "Rules:".bold(),
        rules.len()
    );
    println!("{}", "Press Ctrl-C to stop.".dimmed());
    println!();
}
