//! Error types for the command-line surface
//!
//! The automaton and the controller never fail; everything here comes from
//! parsing configuration, installing the log subscriber, or talking to the
//! terminal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid command-line configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tick interval must be greater than zero")]
    ZeroInterval,

    #[error("input {input:?} has {len} letters, the limit is {max}")]
    InputTooLong { input: String, len: usize, max: usize },

    #[error("--trace needs a non-empty --input")]
    TraceWithoutInput,

    #[error("invalid log filter {filter:?}: {message}")]
    LogFilter { filter: String, message: String },

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("a log subscriber is already installed")]
    SubscriberInstalled,
}

/// Top-level application error
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
