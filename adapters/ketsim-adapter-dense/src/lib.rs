//! Ketsim dense reference emulator
//!
//! Lifts each gate to the full `2^n × 2^n` operator (identity on every
//! untouched qubit) and multiplies it into the state with `ndarray`. This is
//! exponentially more expensive than the kernel and exists to cross-check it.

mod dense;

pub use dense::{DEFAULT_MAX_QUBITS, DenseEmulator};
