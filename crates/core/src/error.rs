//! Error types for Lectio Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store operation failed: {0}")]
    OperationFailed(String),

    #[error("Cannot generate a report from zero sessions")]
    EmptyReport,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Report serialization failed: {0}")]
    Report(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
