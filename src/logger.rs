//! Logging sink owned by the scheduler and shared with reporters.
//!
//! Wraps an output stream plus a color flag. Colors are disabled when the
//! `NO_COLOR` environment variable is set.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Line-oriented info/error sink with optional colorized prefixes.
pub struct Logger {
    out: Box<dyn Write + Send>,
    color: bool,
}

impl Logger {
    pub fn new(out: Box<dyn Write + Send>, color_enabled: bool) -> Self {
        Self {
            out,
            color: color_enabled,
        }
    }

    /// Logger writing to stdout, colorized unless `NO_COLOR` is set.
    pub fn stdout() -> Self {
        let color = std::env::var_os("NO_COLOR").is_none();
        Self::new(Box::new(io::stdout()), color)
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn info(&mut self, msg: &str) {
        let prefix = if self.color {
            "◆ info".blue().bold().to_string()
        } else {
            "◆ info".to_string()
        };
        let _ = writeln!(self.out, "{} {}", prefix, msg);
    }

    pub fn error(&mut self, msg: &str) {
        let prefix = if self.color {
            "✖ error".red().bold().to_string()
        } else {
            "✖ error".to_string()
        };
        let _ = writeln!(self.out, "{} {}", prefix, msg);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").field("color", &self.color).finish()
    }
}
