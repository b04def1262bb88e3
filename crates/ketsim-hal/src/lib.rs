//! Ketsim emulator abstraction layer
//!
//! A common [`Emulator`] trait lets the fast bit-indexed kernel and the dense
//! reference oracle stand in for each other, so that one can be checked
//! against the other.
//!
//! | Emulator | Crate | Notes |
//! |----------|-------|-------|
//! | Kernel | `ketsim-adapter-sim` | Bit-indexed, optionally rayon-parallel |
//! | Dense | `ketsim-adapter-dense` | Full `2^n × 2^n` operators, small states only |
//!
//! # Example
//!
//! An emulator only supplies `apply_matrix`; gates and whole circuits come
//! from the trait's default methods.
//!
//! ```rust
//! use ketsim_circuit::generate;
//! use ketsim_core::{Matrix, OneQubitOperation, QuantumOperation, QubitId, StateVector};
//! use ketsim_hal::{Emulator, EmulatorError, EmulatorInfo, EmulatorResult, check_targets};
//!
//! /// Validates every gate and leaves the state as it is.
//! struct Passthrough {
//!     info: EmulatorInfo,
//! }
//!
//! impl Emulator for Passthrough {
//!     fn name(&self) -> &str {
//!         &self.info.name
//!     }
//!
//!     fn info(&self) -> &EmulatorInfo {
//!         &self.info
//!     }
//!
//!     fn apply_matrix(
//!         &self,
//!         matrix: &Matrix,
//!         targets: &[QubitId],
//!         state: &StateVector,
//!     ) -> EmulatorResult<StateVector> {
//!         check_targets(matrix, targets, state.num_qubits())?;
//!         Ok(state.clone())
//!     }
//! }
//!
//! let emu = Passthrough {
//!     info: EmulatorInfo::new("passthrough", 8),
//! };
//! let circuit = generate(3, 10, 0.5, 27)?;
//! let state = StateVector::new(3)?;
//! assert_eq!(emu.apply_circuit(&circuit, &state)?, state);
//!
//! let stray: QuantumOperation = OneQubitOperation::x(QubitId(5)).into();
//! assert!(matches!(
//!     emu.apply_gate(&stray, &state),
//!     Err(EmulatorError::QubitOutOfRange { .. })
//! ));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod capability;
pub mod emulator;
pub mod error;

pub use capability::EmulatorInfo;
pub use emulator::{Emulator, check_targets, check_width};
pub use error::{EmulatorError, EmulatorResult};
