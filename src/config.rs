//! Run options and `.scss-lint.yml` loading.
//!
//! The scheduler recognizes a single top-level key in the lint config file:
//! `exclude`, a sequence of glob patterns marking paths to skip. Every other
//! key belongs to the lint engine and is ignored here.
//! Defaults:
//! - `all_on_start`: true
//! - `keep_failed`: false
//! - `config_path`: `.scss-lint.yml`
//! - `root`: `.`
//!
//! Overrides precedence: caller overrides > defaults, each field independently.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the lint config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read lint config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("lint config {path} is not valid YAML: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid exclude pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

#[derive(Debug, Clone)]
/// Fully-resolved scheduler options.
pub struct RunOptions {
    /// Lint every matching file once when the host starts the plugin.
    pub all_on_start: bool,
    /// Carry previously-failing paths into the next triggered run.
    pub keep_failed: bool,
    /// Location of the lint config file.
    pub config_path: PathBuf,
    /// Directory full-run discovery globs from.
    pub root: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            all_on_start: true,
            keep_failed: false,
            config_path: PathBuf::from(".scss-lint.yml"),
            root: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Default, Clone)]
/// Caller-supplied option overrides; unset fields fall back to defaults.
pub struct RunOptionsOverrides {
    pub all_on_start: Option<bool>,
    pub keep_failed: Option<bool>,
    pub config_path: Option<PathBuf>,
    pub root: Option<PathBuf>,
}

impl RunOptions {
    /// Resolve options by merging `overrides` over the defaults.
    pub fn resolve(overrides: RunOptionsOverrides) -> RunOptions {
        let defaults = RunOptions::default();
        RunOptions {
            all_on_start: overrides.all_on_start.unwrap_or(defaults.all_on_start),
            keep_failed: overrides.keep_failed.unwrap_or(defaults.keep_failed),
            config_path: overrides.config_path.unwrap_or(defaults.config_path),
            root: overrides.root.unwrap_or(defaults.root),
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Subset of the lint config file recognized by the scheduler.
pub struct ConfigFile {
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Load the recognized subset of the lint config file at `path`.
///
/// Returns `Ok(None)` when the file does not exist; the engine's default
/// configuration is used in that case. An unreadable or malformed file is an
/// error and propagates to the host.
pub fn load_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: ConfigFile = serde_yaml::from_str(&s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(cfg))
}

#[derive(Debug, Default)]
/// Compiled exclude patterns; a path is excluded when any pattern matches.
///
/// Immutable after construction.
pub struct ExclusionSet {
    patterns: Vec<glob::Pattern>,
}

impl ExclusionSet {
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pat in patterns {
            let pat = pat.as_ref();
            let compiled_pat =
                glob::Pattern::new(pat).map_err(|source| ConfigError::Pattern {
                    pattern: pat.to_string(),
                    source,
                })?;
            compiled.push(compiled_pat);
        }
        Ok(Self { patterns: compiled })
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
