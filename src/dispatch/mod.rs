//! Fix dispatcher: reacts to one changed file.
//!
//! Looks up the file's extension in the rule table and runs each configured
//! command in order through the process runner. A failing command is logged
//! and, under ABSOLUTE authority, handed to the repair stub — but it never
//! stops the rest of the chain.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::models::{Authority, RunStatus};
use crate::repair;
use crate::rules::RuleSet;
use crate::runner;

/// Immutable event handler shared between the watcher thread and tests.
#[derive(Debug)]
pub struct Dispatcher {
    rules: RuleSet,
    authority: Authority,
}

/// What happened to one command in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Ok,
    Failed {
        exit_code: Option<i32>,
        repair_attempted: bool,
    },
    ToolMissing,
}

/// Per-command record within a dispatch.
#[derive(Debug, Clone)]
pub struct CommandReport {
    pub program: String,
    pub status: CommandStatus,
}

/// Transient summary of one event's handling; consumed by logs and tests,
/// never persisted.
#[derive(Debug)]
pub struct DispatchReport {
    pub file: PathBuf,
    pub commands: Vec<CommandReport>,
}

impl DispatchReport {
    pub fn failed_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c.status, CommandStatus::Failed { .. }))
            .count()
    }

    pub fn repair_attempts(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| {
                matches!(
                    c.status,
                    CommandStatus::Failed {
                        repair_attempted: true,
                        ..
                    }
                )
            })
            .count()
    }
}

impl Dispatcher {
    pub fn new(rules: RuleSet, authority: Authority) -> Self {
        Self { rules, authority }
    }

    pub fn authority(&self) -> Authority {
        self.authority
    }

    /// Handle one changed file.
    ///
    /// Returns `Ok(None)` when no rule matches the file's extension — no
    /// command is run and nothing is logged. Otherwise runs the full chain
    /// and returns a report of what happened.
    pub fn handle(&self, file_path: &Path) -> Result<Option<DispatchReport>> {
        let extension = match dotted_extension(file_path) {
            Some(extension) => extension,
            None => return Ok(None),
        };

        let templates = match self.rules.templates_for(&extension) {
            Some(templates) => templates,
            None => return Ok(None),
        };

        println!(
            "{} Intercepted change: {}",
            format!("[{}]", self.authority).cyan().bold(),
            file_name(file_path).bold()
        );

        let mut commands = Vec::with_capacity(templates.len());
        for template in templates {
            let status = match runner::run(template, &extension, file_path)? {
                RunStatus::Completed(outcome) => {
                    if outcome.success() {
                        println!("  {} {}", "✓".green(), template.program());
                        CommandStatus::Ok
                    } else {
                        println!(
                            "  {} {} failed (exit code: {:?})",
                            "✗".red(),
                            template.program(),
                            outcome.exit_code
                        );

                        let repair_attempted = self.authority.allows_repair();
                        if repair_attempted {
                            repair::repair(file_path, &outcome.stderr);
                        }

                        CommandStatus::Failed {
                            exit_code: outcome.exit_code,
                            repair_attempted,
                        }
                    }
                }
                // Tool not installed: skipped without output
                RunStatus::ToolMissing => CommandStatus::ToolMissing,
            };

            commands.push(CommandReport {
                program: template.program().to_string(),
                status,
            });
        }

        Ok(Some(DispatchReport {
            file: file_path.to_path_buf(),
            commands,
        }))
    }
}

/// The file's extension with its leading dot, or `None` when it has none.
fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|extension| format!(".{}", extension.to_string_lossy()))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
