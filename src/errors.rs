use std::io;
use thiserror::Error;

/// Error type for shell operations
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{0}")]
    InvalidDirectory(String),

    #[error("{0}")]
    ExecutionError(String),

    #[error("syntax error near unexpected token `{0}'")]
    RedirectionSyntax(String),

    #[error("minish: {path}: {source}")]
    RedirectionTarget {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("exit: {0}: numeric argument required")]
    InvalidExitCode(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] regex::Error),

    #[error("Failed to install logger: {0}")]
    Logging(#[from] log::SetLoggerError),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Interrupted")]
    Interrupted,
}

impl ShellError {
    /// Fatal errors end the shell; everything else stays local to one line.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellError::InvalidExitCode(_))
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
