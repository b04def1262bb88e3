//! Ketsim state-vector kernel
//!
//! Applies one- and two-qubit gates to a dense state vector by recombining
//! amplitudes whose basis indices differ only in the target bits. No full
//! operator is ever built.
//!
//! # Performance
//!
//! | Qubits | Memory per state | Notes |
//! |--------|------------------|-------|
//! | 10 | ~16 KB | Sequential |
//! | 14 | ~256 KB | Parallel from here by default |
//! | 20 | ~16 MB | |
//! | 25 | ~512 MB | Two buffers live during each gate |
//!
//! # Example
//!
//! ```rust
//! use ketsim_adapter_sim::KernelEmulator;
//! use ketsim_core::{OneQubitOperation, QuantumOperation, QubitId, StateVector};
//! use ketsim_hal::Emulator;
//!
//! let emu = KernelEmulator::new();
//! let state = StateVector::new(2).unwrap();
//! let op: QuantumOperation = OneQubitOperation::x(QubitId(1)).into();
//! let out = emu.apply_gate(&op, &state).unwrap();
//! assert_eq!(out[2].re, 1.0);
//! ```

mod emulator;
mod kernel;

pub use emulator::{DEFAULT_PARALLEL_THRESHOLD, KernelConfig, KernelEmulator};
