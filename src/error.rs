use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while editing a session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Please enter at least one task.")]
    NoTasks,

    #[error("No task at position {index} (there are {len})")]
    TaskIndex { index: usize, len: usize },

    #[error("Invalid date '{value}'. Use YYYY-MM-DD.")]
    InvalidDate { value: String },
}

/// Errors raised while reading batch input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Line {line}: unknown due date '{value}'. Use today, asap, daily, custom:N or YYYY-MM-DD.")]
    UnknownDueDate { line: usize, value: String },

    #[error("Line {line}: invalid date '{value}'. Use YYYY-MM-DD.")]
    InvalidDate { line: usize, value: String },

    #[error("Failed to parse JSON tasks: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error for commands.
#[derive(Error, Debug)]
pub enum PriorankError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to read config from '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported shell: {0}")]
    UnsupportedShell(String),
}

pub type Result<T> = std::result::Result<T, PriorankError>;
