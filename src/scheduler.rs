//! Change-set scheduling for watch-triggered lint runs.
//!
//! Decides which paths get submitted to the lint engine on each host event:
//! a full run on startup, per-change runs with optional carry-forward of
//! previously failing paths, exclusion filtering, and de-duplication. Lint
//! results are always forwarded to the reporter sorted by
//! `(filename, location)` ascending; that ordering is the one algorithmic
//! guarantee made here.

use crate::config::{self, ConfigError, ExclusionSet, RunOptions};
use crate::engine::{EngineConfig, EngineError, LintEngine, Reporter};
use crate::host::{WatchHost, WatchPlugin};
use crate::logger::Logger;
use crate::models::{RunSummary, Target};
use glob::glob;
use std::collections::HashSet;
use thiserror::Error;

/// Glob used by full runs, rooted at the configured working directory.
const ALL_STYLESHEETS: &str = "**/*.scss";

/// Errors surfaced to the host from scheduler operations.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("stylesheet discovery with pattern '{pattern}' failed: {source}")]
    Discover {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("lint engine failed: {0}")]
    Engine(EngineError),
}

/// Policy object deciding which paths each run submits to the lint engine.
///
/// Owned state is limited to the loaded configuration and the set of paths
/// that failed the most recent run; the host serializes event delivery, so no
/// further synchronization exists.
pub struct ChangeSetScheduler<E: LintEngine, R: Reporter, H: WatchHost> {
    options: RunOptions,
    config: E::Config,
    exclusions: ExclusionSet,
    host: H,
    reporter: R,
    logger: Logger,
    failed_paths: Vec<String>,
}

impl<E, R, H> ChangeSetScheduler<E, R, H>
where
    E: LintEngine,
    R: Reporter,
    H: WatchHost,
{
    /// Build a scheduler, loading the engine configuration from
    /// `options.config_path`.
    ///
    /// A missing config file is not an error; the engine default configuration
    /// is used and nothing is excluded. Patterns under the file's `exclude`
    /// key are compiled into the scheduler's exclusion set and forwarded to
    /// the engine configuration.
    pub fn new(options: RunOptions, host: H, reporter: R, logger: Logger) -> Result<Self, WatchError> {
        let file = config::load_config_file(&options.config_path)?;
        let mut engine_config = match &file {
            Some(_) => E::Config::load(&options.config_path).map_err(WatchError::Engine)?,
            None => E::Config::default_config(),
        };
        let exclude = file.map(|f| f.exclude).unwrap_or_default();
        for pattern in &exclude {
            engine_config.exclude_file(pattern);
        }
        let exclusions = ExclusionSet::from_patterns(&exclude)?;
        Ok(Self::with_config(
            options,
            engine_config,
            exclusions,
            host,
            reporter,
            logger,
        ))
    }

    /// Build a scheduler around an already-loaded engine configuration.
    pub fn with_config(
        options: RunOptions,
        config: E::Config,
        exclusions: ExclusionSet,
        host: H,
        reporter: R,
        logger: Logger,
    ) -> Self {
        Self {
            options,
            config,
            exclusions,
            host,
            reporter,
            logger,
            failed_paths: Vec::new(),
        }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Paths that produced at least one lint on the most recent run.
    pub fn failed_paths(&self) -> &[String] {
        &self.failed_paths
    }

    /// Filter, de-duplicate, lint, and report one batch of candidate paths.
    fn run(&mut self, paths: Vec<String>) -> Result<RunSummary, WatchError> {
        let survivors: Vec<String> = paths
            .into_iter()
            .filter(|p| !self.exclusions.is_excluded(p) && !self.config.is_excluded(p))
            .collect();
        let targets: Vec<Target> = dedupe(survivors).into_iter().map(Target::new).collect();

        // One engine per run, built from the configuration loaded at startup
        let mut engine = E::from_config(&self.config);
        let mut lints = engine.run(&targets).map_err(WatchError::Engine)?;
        lints.sort_by(|a, b| {
            a.filename
                .cmp(&b.filename)
                .then_with(|| a.location.cmp(&b.location))
        });

        self.failed_paths = dedupe(lints.iter().map(|l| l.filename.clone()).collect());

        if let Some(rendered) = self.reporter.report(&lints, &targets, &mut self.logger) {
            self.logger.info(&rendered);
        }

        let summary = RunSummary {
            files: targets.len(),
            lints: lints.len(),
        };
        self.logger.info(&format!(
            "Inspected {} files, found {} errors.",
            summary.files, summary.lints
        ));
        Ok(summary)
    }
}

impl<E, R, H> WatchPlugin for ChangeSetScheduler<E, R, H>
where
    E: LintEngine,
    R: Reporter,
    H: WatchHost,
{
    fn start(&mut self) -> Result<(), WatchError> {
        self.logger.info("watchlint is running");
        if self.options.all_on_start {
            self.run_all()?;
        }
        Ok(())
    }

    fn reload(&mut self) {
        self.failed_paths.clear();
    }

    fn run_all(&mut self) -> Result<RunSummary, WatchError> {
        self.logger.info("Linting all .scss files");
        let pattern = self
            .options
            .root
            .join(ALL_STYLESHEETS)
            .to_string_lossy()
            .to_string();
        let entries = glob(&pattern).map_err(|source| WatchError::Discover {
            pattern: pattern.clone(),
            source,
        })?;
        let mut candidates = Vec::new();
        for entry in entries {
            if let Ok(path) = entry {
                // Discovery yields paths as globbed; rebase onto the root so
                // exclusion patterns and targets stay root-relative
                let rel = pathdiff::diff_paths(&path, &self.options.root).unwrap_or(path);
                candidates.push(rel.to_string_lossy().to_string());
            }
        }
        let paths = self.host.match_files(candidates);
        self.run_on_changes(paths)
    }

    fn run_on_changes(&mut self, mut paths: Vec<String>) -> Result<RunSummary, WatchError> {
        if self.options.keep_failed {
            // Flatten carried failures into the candidate list before dedup
            paths.extend(self.failed_paths.iter().cloned());
        }
        self.run(paths)
    }
}

/// Drop repeated paths, keeping the first occurrence of each.
fn dedupe(paths: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    paths.into_iter().filter(|p| seen.insert(p.clone())).collect()
}
