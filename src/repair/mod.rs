//! Heuristic repair stub.
//!
//! Placeholder for a future automated-patch pass. It reports what a repair
//! run would look at, waits long enough to feel like analysis, and claims
//! success. It never modifies any file.

use colored::Colorize;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::utils::truncate;

/// Simulated analysis latency.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(800);

/// How much of the failing command's stderr is echoed back.
pub const CONTEXT_PREVIEW_CHARS: usize = 100;

/// Run the repair stub for one failed command.
///
/// Cannot fail; the only observable effects are log lines and the delay.
pub fn repair(file_path: &Path, error_message: &str) {
    let name = file_name(file_path);
    let tag = "[repair]".yellow().bold();

    println!("  {tag} Analyzing failure in {name}...");
    println!(
        "  {tag} Context: {}...",
        truncate(error_message, CONTEXT_PREVIEW_CHARS).dimmed()
    );

    thread::sleep(ANALYSIS_DELAY);

    println!("  {tag} Patch synthesized. Applying fix to {name}.");
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
