//! End-to-end watcher flow: real filesystem events through notify.
//!
//! These tests share the platform notification backend, so they run
//! serially and poll with generous timeouts.

use mend::dispatch::Dispatcher;
use mend::models::Authority;
use mend::rules::{CommandTemplate, RuleSet};
use mend::watcher;
use serial_test::serial;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const SETTLE: Duration = Duration::from_millis(300);
const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Dispatcher whose single `.probe` rule appends a line to `log`.
fn probe_dispatcher(log: &Path) -> Arc<Dispatcher> {
    let script = format!("echo hit >> {}", log.display());
    let mut rules = RuleSet::empty();
    rules.set_rule(
        ".probe",
        vec![CommandTemplate::from_tokens(["sh", "-c", script.as_str()]).unwrap()],
    );
    Arc::new(Dispatcher::new(rules, Authority::Safe))
}

fn wait_for<F: Fn() -> bool>(condition: F) -> bool {
    let start = Instant::now();
    while start.elapsed() < EVENT_TIMEOUT {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    false
}

#[test]
#[serial]
fn test_created_file_is_dispatched() {
    let root = TempDir::new().unwrap();
    let log = root.path().join("hits.log");

    let _watcher = watcher::spawn(root.path(), probe_dispatcher(&log)).unwrap();
    std::thread::sleep(SETTLE);

    std::fs::write(root.path().join("x.probe"), "content").unwrap();

    assert!(
        wait_for(|| log.exists()),
        "create event should reach the dispatcher"
    );
}

#[test]
#[serial]
fn test_modified_file_in_subdirectory_is_dispatched() {
    let root = TempDir::new().unwrap();
    let log = root.path().join("hits.log");

    let nested = root.path().join("deeply").join("nested");
    std::fs::create_dir_all(&nested).unwrap();
    let file = nested.join("y.probe");
    std::fs::write(&file, "v1").unwrap();

    let _watcher = watcher::spawn(root.path(), probe_dispatcher(&log)).unwrap();
    std::thread::sleep(SETTLE);

    std::fs::write(&file, "v2").unwrap();

    assert!(
        wait_for(|| log.exists()),
        "recursive modify event should reach the dispatcher"
    );
}

#[test]
#[serial]
fn test_unconfigured_extension_triggers_nothing() {
    let root = TempDir::new().unwrap();
    let log = root.path().join("hits.log");

    let _watcher = watcher::spawn(root.path(), probe_dispatcher(&log)).unwrap();
    std::thread::sleep(SETTLE);

    std::fs::write(root.path().join("readme.md"), "# readme").unwrap();

    // Give the backend ample time to (not) deliver a dispatch
    std::thread::sleep(Duration::from_millis(1500));
    assert!(!log.exists(), "no rule matches .md, nothing should run");
}

#[test]
#[serial]
fn test_directory_creation_is_filtered() {
    let root = TempDir::new().unwrap();
    let log = root.path().join("hits.log");

    let _watcher = watcher::spawn(root.path(), probe_dispatcher(&log)).unwrap();
    std::thread::sleep(SETTLE);

    // Directory name matches the rule's extension, but directories never
    // reach the dispatcher
    std::fs::create_dir(root.path().join("sub.probe")).unwrap();

    std::thread::sleep(Duration::from_millis(1500));
    assert!(!log.exists(), "directory events must be ignored");
}

#[test]
#[serial]
fn test_dropping_the_watcher_stops_delivery() {
    let root = TempDir::new().unwrap();
    let log = root.path().join("hits.log");

    let watcher = watcher::spawn(root.path(), probe_dispatcher(&log)).unwrap();
    std::thread::sleep(SETTLE);
    drop(watcher);
    std::thread::sleep(SETTLE);

    std::fs::write(root.path().join("x.probe"), "content").unwrap();

    std::thread::sleep(Duration::from_millis(1500));
    assert!(!log.exists(), "a dropped watcher delivers no events");
}
