//! Seams to the external lint engine and reporter.
//!
//! The scheduler owns no lint rules and no report rendering; both live behind
//! these traits. Engine failures are opaque to the scheduler and propagate to
//! the host unchanged.

use crate::logger::Logger;
use crate::models::{Lint, Target};
use std::path::Path;

/// Opaque failure raised by the lint engine.
pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Configuration handle owned by the external lint engine.
///
/// The scheduler loads it from the lint config file when one exists and falls
/// back to `default_config` otherwise. Patterns under the file's `exclude` key
/// are forwarded through `exclude_file` so the engine's own exclusion check
/// stays consistent with the scheduler's.
pub trait EngineConfig: Sized {
    fn load(path: &Path) -> Result<Self, EngineError>;

    fn default_config() -> Self;

    /// Register an additional exclude pattern.
    fn exclude_file(&mut self, pattern: &str);

    /// True when the engine's own configuration excludes `path`.
    fn is_excluded(&self, path: &str) -> bool;
}

/// External lint engine invoked once per run with the prepared target list.
pub trait LintEngine {
    type Config: EngineConfig;

    /// Construct an engine for one run from the loaded configuration.
    fn from_config(config: &Self::Config) -> Self;

    /// Lint `targets` synchronously and return every violation found.
    fn run(&mut self, targets: &[Target]) -> Result<Vec<Lint>, EngineError>;
}

/// Renders lint results for human consumption.
///
/// `lints` arrives sorted by `(filename, location)`. A `Some` return is
/// forwarded to the logger by the scheduler; `None` means nothing to report.
pub trait Reporter {
    fn report(&self, lints: &[Lint], targets: &[Target], logger: &mut Logger) -> Option<String>;
}
