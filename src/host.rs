//! Interfaces between the scheduler and the file-watching host.
//!
//! The host owns the watcher and the event loop; the scheduler never drives
//! its own lifecycle. Events arrive serialized, one at a time.

use crate::models::RunSummary;
use crate::scheduler::WatchError;

/// Host-side filter narrowing candidate paths to ones this plugin owns.
pub trait WatchHost {
    fn match_files(&self, candidates: Vec<String>) -> Vec<String>;
}

/// Hosts that filter with a plain closure need no newtype.
impl<F> WatchHost for F
where
    F: Fn(Vec<String>) -> Vec<String>,
{
    fn match_files(&self, candidates: Vec<String>) -> Vec<String> {
        self(candidates)
    }
}

/// Lifecycle entry points the host invokes on watch events.
pub trait WatchPlugin {
    /// Called once when the host starts; may trigger a full run.
    fn start(&mut self) -> Result<(), WatchError>;

    /// Called on a configuration-reload signal; clears carried failures.
    fn reload(&mut self);

    /// Lint every stylesheet under the configured root.
    fn run_all(&mut self) -> Result<RunSummary, WatchError>;

    /// Lint a batch of changed paths.
    fn run_on_changes(&mut self, paths: Vec<String>) -> Result<RunSummary, WatchError>;
}
