//! Command-line configuration

use crate::automaton::{filter_input, MAX_LENGTH};
use crate::controller::DEFAULT_TICK_INTERVAL;
use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "palindrome-nfa",
    version,
    about = "Step through a palindrome-checking automaton in the terminal"
)]
pub struct Cli {
    /// Initial input (letters a-z, at most 7 after filtering)
    #[arg(long)]
    pub input: Option<String>,

    /// Milliseconds between animation ticks
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL.as_millis() as u64)]
    pub interval_ms: u64,

    /// Print the walkthrough to stdout instead of starting the TUI
    #[arg(long)]
    pub trace: bool,

    /// Write logs to this file (the TUI owns the terminal)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `info` or `palindrome_nfa=trace`
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Validated settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: String,
    pub tick_interval: Duration,
    pub trace: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Cli {
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        let input = filter_input(self.input.as_deref().unwrap_or_default());
        if input.len() > MAX_LENGTH {
            return Err(ConfigError::InputTooLong {
                len: input.len(),
                input,
                max: MAX_LENGTH,
            });
        }
        if self.trace && input.is_empty() {
            return Err(ConfigError::TraceWithoutInput);
        }

        Ok(Settings {
            input,
            tick_interval: Duration::from_millis(self.interval_ms),
            trace: self.trace,
            log_file: self.log_file,
            log_level: self.log_level,
        })
    }
}
