//! End-to-end dispatcher behavior through the public API.

use mend::config;
use mend::dispatch::{CommandStatus, Dispatcher};
use mend::models::Authority;
use mend::rules::{CommandTemplate, RuleSet};
use mend::runner;
use tempfile::TempDir;

fn template(tokens: &[&str]) -> CommandTemplate {
    CommandTemplate::from_tokens(tokens.iter().copied()).unwrap()
}

/// Every built-in Python command receives the changed file as its final
/// argument.
#[test]
fn test_builtin_python_chain_is_fully_path_bound() {
    let rules = RuleSet::builtin();
    for command in rules.templates_for(".py").unwrap() {
        assert!(
            runner::wants_path_argument(".py", command.program()),
            "{} should receive the file path",
            command.program()
        );
    }
}

/// For Go and Rust, only programs whose name contains "fmt" get the path.
#[test]
fn test_builtin_go_and_rust_path_asymmetry() {
    let rules = RuleSet::builtin();

    let go_bound: Vec<bool> = rules
        .templates_for(".go")
        .unwrap()
        .iter()
        .map(|t| runner::wants_path_argument(".go", t.program()))
        .collect();
    // gofmt yes; go vet and go build no
    assert_eq!(go_bound, vec![true, false, false]);

    let rust_bound: Vec<bool> = rules
        .templates_for(".rs")
        .unwrap()
        .iter()
        .map(|t| runner::wants_path_argument(".rs", t.program()))
        .collect();
    // cargo fmt and cargo build both start with "cargo"
    assert_eq!(rust_bound, vec![false, false]);
}

/// A failing first command still lets the rest of the chain run, and under
/// ABSOLUTE authority the failure is handed to the repair stub.
#[test]
fn test_failing_command_triggers_repair_then_chain_continues() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("ran-after-failure");

    let touch = format!("touch {}", marker.display());
    let mut rules = RuleSet::empty();
    rules.set_rule(
        ".probe",
        vec![
            template(&["sh", "-c", "echo boom >&2; exit 3"]),
            template(&["sh", "-c", touch.as_str()]),
        ],
    );

    let dispatcher = Dispatcher::new(rules, Authority::Absolute);
    let file = dir.path().join("m.probe");
    std::fs::write(&file, "x").unwrap();

    let report = dispatcher.handle(&file).unwrap().unwrap();

    assert_eq!(report.commands.len(), 2);
    assert_eq!(
        report.commands[0].status,
        CommandStatus::Failed {
            exit_code: Some(3),
            repair_attempted: true,
        }
    );
    assert_eq!(report.commands[1].status, CommandStatus::Ok);
    assert!(marker.exists());
}

/// Under SAFE authority the same failure is reported but never repaired.
#[test]
fn test_safe_authority_reports_without_repair() {
    let dir = TempDir::new().unwrap();

    let mut rules = RuleSet::empty();
    rules.set_rule(".probe", vec![template(&["false"])]);

    let dispatcher = Dispatcher::new(rules, Authority::Safe);
    let file = dir.path().join("m.probe");
    std::fs::write(&file, "x").unwrap();

    let report = dispatcher.handle(&file).unwrap().unwrap();
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.repair_attempts(), 0);
}

/// A file whose extension has no rule produces no report at all.
#[test]
fn test_unconfigured_extension_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let dispatcher = Dispatcher::new(RuleSet::builtin(), Authority::Absolute);

    let file = dir.path().join("readme.md");
    std::fs::write(&file, "# readme").unwrap();

    assert!(dispatcher.handle(&file).unwrap().is_none());
}

/// Rules from mend.toml flow through config loading into the dispatcher.
#[test]
fn test_config_file_rules_drive_dispatch() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("config-rule-ran");

    std::fs::write(
        dir.path().join("mend.toml"),
        format!(
            "[rules]\n\".probe\" = [[\"sh\", \"-c\", \"touch {}\"]]\n",
            marker.display()
        ),
    )
    .unwrap();

    let file_config = config::load(dir.path()).unwrap();
    let rules = config::effective_rules(file_config.as_ref()).unwrap();
    let dispatcher = Dispatcher::new(rules, Authority::Safe);

    let file = dir.path().join("x.probe");
    std::fs::write(&file, "x").unwrap();

    let report = dispatcher.handle(&file).unwrap().unwrap();
    assert_eq!(report.commands[0].status, CommandStatus::Ok);
    assert!(marker.exists());
}
