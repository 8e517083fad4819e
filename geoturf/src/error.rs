//! Error types used by the crate.

use thiserror::Error;

/// Error returned by the operations of [`Turf`](crate::Turf).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TurfError {
    /// The engine did not produce a decodable answer.
    #[error("geometry engine returned no result")]
    NoResult,
    /// A scalar or configuration argument cannot be passed to the engine.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Fault reported by the geometry engine while loading or executing an operation.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("geometry engine fault in '{operation}': {message}")]
pub struct EngineFault {
    /// Name of the operation that failed.
    pub operation: String,
    /// Message of the engine.
    pub message: String,
}

impl EngineFault {
    /// Creates a new fault.
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
