use std::time::Duration;

/// Result of one external command invocation.
///
/// Transient: produced by the runner, consumed by the dispatcher for logging
/// and repair gating, never persisted.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

impl CommandOutcome {
    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// One-line summary for diagnostics.
    pub fn summary(&self) -> String {
        let status = if self.success() { "OK" } else { "ERR" };
        format!(
            "{} ({}ms, exit code: {:?})",
            status,
            self.duration.as_millis(),
            self.exit_code
        )
    }
}

/// What happened when the runner tried to execute a template.
///
/// A missing executable is a deliberate no-op, not an error, so it gets its
/// own variant rather than an `Err`.
#[derive(Debug)]
pub enum RunStatus {
    /// The process was spawned and ran to completion.
    Completed(CommandOutcome),
    /// The executable was not found on PATH; the invocation was skipped.
    ToolMissing,
}

impl RunStatus {
    /// Returns the outcome if the command actually ran.
    pub fn outcome(&self) -> Option<&CommandOutcome> {
        match self {
            RunStatus::Completed(outcome) => Some(outcome),
            RunStatus::ToolMissing => None,
        }
    }
}
