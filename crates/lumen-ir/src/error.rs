//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur constructing IR values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate name is not in the supported set.
    #[error("Unknown gate '{0}': expected one of Rx, Ry, CNOT")]
    UnknownGate(String),

    /// Encoding name is not in the supported set.
    #[error("Invalid encoding '{0}': expected 'pol_path' or 'path_only'")]
    InvalidEncoding(String),

    /// Gate was given the wrong number of operands.
    #[error("Gate '{gate}' requires {expected} operand(s), got {got}")]
    OperandCountMismatch {
        /// Name of the gate.
        gate: String,
        /// Expected number of operands.
        expected: u32,
        /// Actual number of operands provided.
        got: u32,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
