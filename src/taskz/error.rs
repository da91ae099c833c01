use thiserror::Error;

/// Errors only exist at the boundary: terminal I/O, serialization, and bad
/// user input in the CLI. The core state transitions are total by design —
/// unknown ids are silent no-ops, never errors.
#[derive(Error, Debug)]
pub enum TaskzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, TaskzError>;
