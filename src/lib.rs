//! Watchlint core library.
//!
//! This crate exposes the change-set scheduling layer that sits between a
//! file-watching host framework and an external SCSS lint engine. The crate
//! owns no lint rules, no file watcher, and no report rendering; those live
//! behind narrow trait seams. What it does own is the policy deciding which
//! paths each triggered run submits: full runs on startup, exclusion
//! filtering, de-duplication, and optional carry-forward of previously
//! failing paths.
//!
//! High-level modules:
//! - `config`: Run options, override resolution, and `.scss-lint.yml` loading.
//! - `engine`: Trait seams for the external lint engine and reporter.
//! - `host`: Traits connecting the scheduler to the watching host.
//! - `logger`: Colorized info/error sink shared with reporters.
//! - `models`: Data models for targets, lints, and run summaries.
//! - `scheduler`: The change-set scheduler driving lint runs.
pub mod config;
pub mod engine;
pub mod host;
pub mod logger;
pub mod models;
pub mod scheduler;

pub use config::{RunOptions, RunOptionsOverrides};
pub use host::{WatchHost, WatchPlugin};
pub use scheduler::{ChangeSetScheduler, WatchError};
