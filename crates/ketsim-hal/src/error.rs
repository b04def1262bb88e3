//! Error types for the HAL crate.

use ketsim_core::{CoreError, QubitId};
use thiserror::Error;

/// Errors that can occur while evolving a state.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EmulatorError {
    /// Target qubit does not exist in the state.
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit state")]
    QubitOutOfRange {
        /// Offending target.
        qubit: QubitId,
        /// Qubits in the state.
        num_qubits: usize,
    },

    /// Only one- and two-qubit gates can be applied.
    #[error("Cannot apply a gate on {0} qubits (only 1 or 2)")]
    UnsupportedArity(usize),

    /// Circuit and state disagree on the number of qubits.
    #[error("Circuit width {circuit_width} does not match state of {state_qubits} qubits")]
    SizeMismatch {
        /// Width of the circuit.
        circuit_width: u32,
        /// Qubits in the state.
        state_qubits: usize,
    },

    /// The identity reference operation has no qubits to act on.
    #[error("Operation has no bound target qubits")]
    UnboundTarget,

    /// State exceeds what the emulator can hold.
    #[error("{requested} qubits exceed the emulator limit of {max}")]
    TooManyQubits {
        /// Qubits in the state.
        requested: usize,
        /// Emulator limit.
        max: usize,
    },

    /// Malformed matrix or targets.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for emulator operations.
pub type EmulatorResult<T> = Result<T, EmulatorError>;
