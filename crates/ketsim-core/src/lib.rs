//! Ketsim core types
//!
//! This crate holds the data every other ketsim crate shares: dense state
//! vectors and validated one- and two-qubit operations.
//!
//! # Conventions
//!
//! Qubit `k` is bit `k` of a basis-state index, so qubit 0 is the
//! least-significant bit. A two-qubit operation on targets `[a, b]` uses
//! `(bit b << 1) | bit a` as its matrix row and column index, so the second
//! target is the high-order bit.
//!
//! # Example
//!
//! ```rust
//! use ketsim_core::{OneQubitOperation, QuantumOperation, QubitId, StateVector};
//!
//! let state = StateVector::new(2).unwrap();
//! assert_eq!(state.len(), 4);
//!
//! let op: QuantumOperation = OneQubitOperation::x(QubitId(1)).into();
//! assert_eq!(op.targets(), Some(vec![QubitId(1)]));
//! ```
//!
//! Amplitudes are never normalised. Evolving a state is the job of an
//! emulator, which always returns a fresh [`StateVector`].

pub mod error;
pub mod matrices;
pub mod operation;
pub mod qubit;
pub mod state;

pub use error::{CoreError, CoreResult};
pub use matrices::Matrix;
pub use operation::{Arity, OneQubitOperation, QuantumOperation, TwoQubitOperation};
pub use qubit::QubitId;
pub use state::{MAX_QUBITS, StateVector};
