//! Ketsim random circuits
//!
//! A deterministic linear congruential generator, random unitaries
//! `exp(iH)` built from it, and a generator that turns the stream into a
//! circuit of random one- and two-qubit gates packed into qubit-disjoint
//! layers.
//!
//! # Example
//!
//! ```rust
//! use ketsim_circuit::generate;
//!
//! let circuit = generate(4, 20, 0.5, 27).unwrap();
//! assert_eq!(circuit.gates().len(), 20);
//! assert!(circuit.num_layers() <= 20);
//! ```

pub mod circuit;
pub mod error;
pub mod expm;
pub mod generator;
pub mod layer;
pub mod random;

pub use circuit::QuantumCircuit;
pub use error::{CircuitError, CircuitResult};
pub use generator::{CircuitGenerator, CircuitSpec, generate};
pub use layer::Layer;
pub use random::PseudoRandomGenerator;
