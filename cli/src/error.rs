//! Error types for the interactive front end.

use network_graph::GraphError;
use thiserror::Error;

/// Result type for command handling.
pub type CliResult<T> = Result<T, CliError>;

/// Errors raised while reading a command or carrying it out.
#[derive(Error, Debug)]
pub enum CliError {
    /// A prompted field could not be converted to its type.
    #[error("invalid {field}: '{value}'")]
    InvalidInput { field: &'static str, value: String },

    /// Menu selection that maps to no command.
    #[error("invalid option: '{0}'")]
    UnknownCommand(String),

    /// The graph rejected the operation.
    #[error("{0}")]
    Graph(#[from] GraphError),

    /// Input closed while a command or field was expected.
    #[error("end of input")]
    EndOfInput,

    /// Reading the prompt or writing the transcript failed.
    #[error("console I/O error: {0}")]
    Console(#[from] std::io::Error),
}

impl CliError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }

    /// Errors that end the session instead of being reported and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Console(_))
    }
}
