//! Error types for the phase engine.
//!
//! The engine operations themselves are total; only strict phase conversion
//! and configuration loading can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhaseError {
    #[error("Unknown phase ordinal: {0}")]
    UnknownPhase(i64),

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PhaseError>;
