//! Error types for the qubit state engine.

use thiserror::Error;

/// Errors produced by state validation and gate application.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum StateError {
    /// The proposed amplitudes are not unit-norm.
    #[error("Qubit state must have unit norm: |alpha|^2 + |beta|^2 deviates from 1 by {deviation:e}")]
    InvalidState {
        /// `|alpha|^2 + |beta|^2 - 1` for the rejected pair.
        deviation: f64,
    },

    /// Gate name not recognised.
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// A parameterized gate was applied without its angle.
    #[error("Gate '{gate}' requires a numeric parameter")]
    MissingParameter {
        /// Name of the gate.
        gate: &'static str,
    },

    /// The gate parameter is NaN or infinite.
    #[error("Gate '{gate}' received a non-finite parameter: {value}")]
    InvalidParameter {
        /// Name of the gate.
        gate: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type for state operations.
pub type StateResult<T> = Result<T, StateError>;
