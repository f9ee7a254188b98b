//! Optional `mend.toml` configuration layer.
//!
//! The file lives at the watch root and may set a default authority level
//! and add or override extension rules:
//!
//! ```toml
//! authority = "SAFE"
//!
//! [rules]
//! ".py" = [["ruff", "check", "--fix"], ["ruff", "format"]]
//! ".sh" = [["shellcheck"]]
//! ```
//!
//! Precedence is CLI flag > config file > built-in defaults. A missing file
//! is fine; a malformed one is a startup error.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::models::Authority;
use crate::rules::{CommandTemplate, RuleSet};

pub const CONFIG_FILE_NAME: &str = "mend.toml";

/// Errors produced while loading `mend.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("rule for {extension:?} must start with a dot (e.g. \".py\")")]
    InvalidExtension { extension: String },

    #[error("rule for {extension:?} contains an empty command template")]
    EmptyTemplate { extension: String },
}

/// Deserialized shape of `mend.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub authority: Option<Authority>,
    #[serde(default)]
    pub rules: BTreeMap<String, Vec<Vec<String>>>,
}

impl FileConfig {
    /// Merge this config's rules over a base rule set.
    ///
    /// Each configured extension fully replaces the base templates for that
    /// extension; other extensions are untouched.
    pub fn apply_rules(&self, base: &mut RuleSet) -> Result<(), ConfigError> {
        for (extension, templates) in &self.rules {
            if !extension.starts_with('.') {
                return Err(ConfigError::InvalidExtension {
                    extension: extension.clone(),
                });
            }

            let mut converted = Vec::with_capacity(templates.len());
            for tokens in templates {
                let template = CommandTemplate::from_tokens(tokens.iter().cloned()).ok_or_else(
                    || ConfigError::EmptyTemplate {
                        extension: extension.clone(),
                    },
                )?;
                converted.push(template);
            }

            base.set_rule(extension.clone(), converted);
        }
        Ok(())
    }
}

/// Load `mend.toml` from the given root, if present.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load(root: &Path) -> Result<Option<FileConfig>, ConfigError> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;

    let config: FileConfig =
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })?;

    Ok(Some(config))
}

/// The effective rule table: built-ins with config overrides applied.
pub fn effective_rules(config: Option<&FileConfig>) -> Result<RuleSet, ConfigError> {
    let mut rules = RuleSet::builtin();
    if let Some(config) = config {
        config.apply_rules(&mut rules)?;
    }
    Ok(rules)
}
