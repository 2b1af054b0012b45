// Error types: arena setup failures and configuration parsing errors

use thiserror::Error;

/// Setup Errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SetupError {
    #[error("Cannot place {requested} hazards: only {available} empty cells on the board")]
    BoardTooCrowded { requested: usize, available: usize },
    #[error("No free cell left to place robot '{0}'")]
    NoFreeCell(String),
    #[error("Position {row},{col} is not a free cell")]
    CellUnavailable { row: i32, col: i32 },
    #[error("No robots loaded. Nothing to do")]
    NoRobots,
}

/// Configuration Errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: &'static str, value: String },
    #[error("Expected at most 7 fields, found {0}")]
    TooManyFields(usize),
}
