use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum BarError {
    #[error("config error: {0}")]
    Config(String),

    #[error("IPC error: {0}")]
    Ipc(String),

    /// The input line could not be turned into an update; ends the session.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Failure to render a compiled template against a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("placeholder {{{index}}} is out of range ({len} tokens available)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = BarError> = std::result::Result<T, E>;
