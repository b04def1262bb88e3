//! Error types for circuit generation.

use ketsim_core::CoreError;
use thiserror::Error;

/// Errors that can occur while generating a random circuit.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CircuitError {
    /// A circuit needs at least one qubit.
    #[error("Invalid circuit width {0}: at least one qubit is required")]
    InvalidWidth(u32),

    /// Two-qubit weight must be a probability.
    #[error("Invalid two-qubit weight {0}: must lie in [0, 1]")]
    InvalidWeight(f64),

    /// A linear congruential generator needs a non-zero modulus.
    #[error("Invalid generator modulus: must be non-zero")]
    InvalidModulus,

    /// The random stream cannot produce a second, distinct target qubit.
    #[error("Random stream for seed {seed} cannot draw two distinct qubits")]
    StalledGenerator {
        /// Seed of the stalled stream.
        seed: u64,
    },

    /// Layer index past the end of the circuit.
    #[error("Layer {index} out of range: circuit has {num_layers} layers")]
    LayerOutOfRange {
        /// Requested layer.
        index: usize,
        /// Number of layers in the circuit.
        num_layers: usize,
    },

    /// An operation could not be built.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for circuit operations.
pub type CircuitResult<T> = Result<T, CircuitError>;
