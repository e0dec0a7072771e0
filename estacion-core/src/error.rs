//! Error types for estacion.

use thiserror::Error;

use crate::status::{Action, AppointmentStatus};

/// Errors that can occur in estacion operations.
#[derive(Error, Debug)]
pub enum EstacionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{kind} #{id} not found")]
    NotFound { kind: &'static str, id: u32 },

    #[error("Cannot {action} an appointment that is {status}")]
    TransitionNotAllowed {
        action: Action,
        status: AppointmentStatus,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for estacion operations.
pub type EstacionResult<T> = Result<T, EstacionError>;
