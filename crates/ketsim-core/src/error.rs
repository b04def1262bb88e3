//! Error types for the core crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors raised while constructing state vectors and quantum operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Gate matrix does not have the `2^k × 2^k` shape its arity requires.
    #[error("Matrix of shape {rows}x{cols} does not fit a {arity}-qubit operation")]
    DimensionMismatch {
        /// Number of qubits the operation acts on.
        arity: usize,
        /// Rows of the offending matrix.
        rows: usize,
        /// Columns of the offending matrix.
        cols: usize,
    },

    /// Number of target qubits does not match the matrix size.
    #[error("Operation expects {expected} target qubit(s), got {got}")]
    ArityMismatch {
        /// Number of qubits implied by the matrix.
        expected: usize,
        /// Number of target qubits supplied.
        got: usize,
    },

    /// Only one- and two-qubit operations exist.
    #[error("Operations on {0} qubits are not supported (only 1 or 2)")]
    UnsupportedArity(usize),

    /// A two-qubit operation names the same qubit twice.
    #[error("Duplicate qubit {0} in two-qubit operation")]
    DuplicateQubit(QubitId),

    /// Amplitude list or qubit count cannot describe a state.
    #[error("Malformed state vector: {0}")]
    MalformedVector(String),

    /// Replacement amplitudes have the wrong length.
    #[error("Vector length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Length of the current vector.
        expected: usize,
        /// Length of the replacement.
        got: usize,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
