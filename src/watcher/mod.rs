//! Filesystem watching via the `notify` crate.
//!
//! The recommended watcher delivers events on its own thread; the callback
//! filters out directories and non-change events, then invokes the
//! dispatcher synchronously. Delivery errors are logged and never terminate
//! the process.

use anyhow::{Context, Result};
use notify::{recommended_watcher, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::Arc;

use crate::dispatch::Dispatcher;

/// Start watching `root` recursively, forwarding create/modify events for
/// files to `dispatcher`.
///
/// The returned watcher must be kept alive for the subscription to persist;
/// dropping it stops event delivery.
pub fn spawn(root: &Path, dispatcher: Arc<Dispatcher>) -> Result<RecommendedWatcher> {
    let mut watcher = recommended_watcher(move |event_result: notify::Result<Event>| {
        match event_result {
            Ok(event) => handle_event(&dispatcher, event),
            Err(error) => eprintln!("mend: watch error: {error}"),
        }
    })
    .with_context(|| format!("failed to create filesystem watcher for {}", root.display()))?;

    watcher
        .watch(root, RecursiveMode::Recursive)
        .with_context(|| format!("failed to watch {}", root.display()))?;

    Ok(watcher)
}

fn handle_event(dispatcher: &Dispatcher, event: Event) {
    if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
        return;
    }

    for path in event.paths {
        if path.is_dir() {
            continue;
        }
        if let Err(error) = dispatcher.handle(&path) {
            eprintln!("mend: failed to handle {}: {error:#}", path.display());
        }
    }
}
