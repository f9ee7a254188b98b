//! Process runner: executes one command template against one changed file.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::models::{CommandOutcome, RunStatus};
use crate::rules::CommandTemplate;

/// Whether the changed file's path is appended as the command's final
/// argument.
///
/// For `.rs` and `.go` files, only programs whose name contains `fmt`
/// operate on a single file; everything else (go vet, go build, cargo fmt,
/// cargo build) runs against the whole project and must not be given the
/// path. All other extensions always receive the path.
pub fn wants_path_argument(extension: &str, program: &str) -> bool {
    !matches!(extension, ".rs" | ".go") || program.contains("fmt")
}

/// Run one template against one file, blocking until the process exits.
///
/// Captures stdout and stderr as text. A missing executable yields
/// `RunStatus::ToolMissing` instead of an error; any other spawn failure
/// propagates. No timeout is enforced — a hung tool blocks the caller.
pub fn run(template: &CommandTemplate, extension: &str, file_path: &Path) -> Result<RunStatus> {
    let start = Instant::now();

    let mut command = Command::new(template.program());
    command
        .args(template.args())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if wants_path_argument(extension, template.program()) {
        command.arg(file_path);
    }

    let output = match command.output() {
        Ok(output) => output,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            // Tool not installed; skip silently
            return Ok(RunStatus::ToolMissing);
        }
        Err(error) => {
            return Err(error)
                .with_context(|| format!("failed to spawn command: {}", template.display_line()))
        }
    };

    Ok(RunStatus::Completed(CommandOutcome {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
    }))
}
