//! Extension-to-pipeline rule table.
//!
//! Maps a file extension (with its leading dot) to the ordered list of
//! command templates to run against a changed file. The built-in table is
//! static; an optional `mend.toml` may override or extend it at startup.
//! After that the table is read-only.

use std::collections::BTreeMap;

/// A program name plus its fixed arguments, not yet bound to a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    program: String,
    args: Vec<String>,
}

impl CommandTemplate {
    /// Build a template from ordered tokens. The first token is the program.
    ///
    /// Returns `None` for an empty token list — a template with no program
    /// is meaningless.
    pub fn from_tokens<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = tokens.into_iter().map(Into::into);
        let program = tokens.next()?;
        Some(Self {
            program,
            args: tokens.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The template as it would appear on a command line.
    pub fn display_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// The full set of extension rules, keyed by extension string.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: BTreeMap<String, Vec<CommandTemplate>>,
}

impl RuleSet {
    /// The built-in rule table.
    ///
    /// Template order within an extension is significant: commands run in
    /// the listed order.
    pub fn builtin() -> Self {
        let table: &[(&str, &[&[&str]])] = &[
            (
                ".py",
                &[
                    &["autoflake", "--in-place", "--remove-all-unused-imports"],
                    &["isort"],
                    &["black"],
                    &["flake8"],
                ],
            ),
            (".go", &[&["gofmt", "-w"], &["go", "vet"], &["go", "build", "./..."]]),
            (".rs", &[&["cargo", "fmt"], &["cargo", "build"]]),
            (".js", &[&["prettier", "--write"], &["eslint", "--fix"]]),
            (".ts", &[&["prettier", "--write"], &["eslint", "--fix"]]),
            (".tsx", &[&["prettier", "--write"]]),
            (".jsx", &[&["prettier", "--write"]]),
        ];

        let mut rules = BTreeMap::new();
        for (extension, templates) in table {
            let templates: Vec<CommandTemplate> = templates
                .iter()
                .map(|tokens| {
                    CommandTemplate::from_tokens(tokens.iter().copied())
                        .expect("built-in templates are non-empty")
                })
                .collect();
            rules.insert((*extension).to_string(), templates);
        }

        Self { rules }
    }

    /// An empty rule set, mainly useful for tests.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Replace or add the templates for one extension.
    pub fn set_rule(&mut self, extension: impl Into<String>, templates: Vec<CommandTemplate>) {
        self.rules.insert(extension.into(), templates);
    }

    /// Ordered templates for an extension, or `None` when no rule exists.
    pub fn templates_for(&self, extension: &str) -> Option<&[CommandTemplate]> {
        self.rules.get(extension).map(Vec::as_slice)
    }

    /// All configured extensions, in sorted order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Distinct program names across every rule, sorted.
    pub fn programs(&self) -> Vec<&str> {
        let mut programs: Vec<&str> = self
            .rules
            .values()
            .flatten()
            .map(CommandTemplate::program)
            .collect();
        programs.sort_unstable();
        programs.dedup();
        programs
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
