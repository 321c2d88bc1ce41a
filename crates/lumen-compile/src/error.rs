//! Error types for the compilation crate.

use lumen_ir::{IrError, Qubit};
use thiserror::Error;

/// Errors that can occur during gate lowering or circuit composition.
///
/// Every failure is surfaced before any circuit state is touched; a failed
/// call never leaves a partially mutated circuit behind.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// An IR-level construction error (unknown gate name, bad encoding).
    #[error(transparent)]
    Ir(#[from] IrError),

    /// A qubit operand outside the register.
    #[error("Operand {qubit} out of range for a {num_qubits}-qubit register")]
    OperandOutOfRange {
        /// The offending operand.
        qubit: Qubit,
        /// Size of the register.
        num_qubits: usize,
    },

    /// The same qubit used as both control and target.
    #[error("Duplicate operand {qubit}: control and target must differ")]
    DuplicateOperand {
        /// The duplicated operand.
        qubit: Qubit,
    },

    /// A CNOT operand combination with no optical decomposition.
    #[error("Unsupported CNOT configuration: control {control}, target {target}")]
    UnsupportedCnot {
        /// The control operand.
        control: Qubit,
        /// The target operand.
        target: Qubit,
    },

    /// Composition of circuits over different register sizes.
    #[error("Cannot compose circuits with {left} and {right} qubits")]
    IncompatibleCircuits {
        /// Register size of the left circuit.
        left: usize,
        /// Register size of the right circuit.
        right: usize,
    },

    /// Register too small to carry the encoding.
    #[error("Circuit requires at least 2 qubits, got {got}")]
    TooFewQubits {
        /// The rejected register size.
        got: usize,
    },
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
