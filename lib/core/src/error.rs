use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid classifier configuration: {0}")]
    Config(String),

    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to parse {}: {reason}", .path.display())]
    InputParse { path: PathBuf, reason: String },

    #[error("No keys could be extracted from {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Short machine-readable label used when a file is skipped
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::InputNotFound(_) => "input_not_found",
            Error::InputParse { .. } => "input_parse",
            Error::EmptyInput(_) => "empty_input",
            Error::Io(_) => "io",
            Error::Serialization(_) => "serialization",
        }
    }

    /// Only configuration problems are allowed to stop the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
