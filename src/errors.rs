use thiserror::Error;

/// Failures raised by persistence backends and the expense blob codec.
///
/// [`crate::store::Expenses`] absorbs every variant; callers of the store never
/// observe one.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Write error: {0}")]
    Write(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error surfaced by the configuration layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// User-facing CLI error wrapper. Anything that reaches this type ends the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
