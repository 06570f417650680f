//! Error types for Seatbook Core

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid hand code: {0}")]
    InvalidHand(String),

    #[error("Invalid hand range: {0}")]
    InvalidRange(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown position: {0}")]
    UnknownPosition(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
