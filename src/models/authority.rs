use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Authority level supplied at startup.
///
/// Controls whether a failed command hands its stderr to the heuristic
/// repair stub. Immutable for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "UPPER")]
#[serde(rename_all = "UPPERCASE")]
pub enum Authority {
    /// Report failures only; never attempt repair.
    Safe,
    /// Attempt heuristic repair after every failed command.
    Absolute,
}

impl Authority {
    /// Whether a failed command should trigger the repair stub.
    pub fn allows_repair(&self) -> bool {
        matches!(self, Authority::Absolute)
    }
}

impl Default for Authority {
    fn default() -> Self {
        Authority::Absolute
    }
}

impl std::fmt::Display for Authority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Authority::Safe => write!(f, "SAFE"),
            Authority::Absolute => write!(f, "ABSOLUTE"),
        }
    }
}
