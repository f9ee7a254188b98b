//! mend — watches a directory tree and runs quality tooling on changed files.
//!
//! A filesystem event flows from the watcher to the dispatcher, which looks
//! up the changed file's extension in the rule table and runs each configured
//! command through the process runner. Failed commands may hand their stderr
//! to the heuristic repair stub, gated by the authority level.

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod models;
pub mod repair;
pub mod rules;
pub mod runner;
pub mod utils;
pub mod watcher;
