//! Random circuit generation.

use ketsim_core::{Arity, OneQubitOperation, QuantumOperation, QubitId, TwoQubitOperation};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::circuit::QuantumCircuit;
use crate::error::{CircuitError, CircuitResult};
use crate::random::{DEFAULT_SEED, PseudoRandomGenerator};

/// Parameters of a random circuit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitSpec {
    /// Number of qubits.
    pub width: u32,
    /// Number of gates.
    pub depth: usize,
    /// Probability that a gate acts on two qubits.
    pub two_qubit_weight: f64,
    /// Seed of the random source.
    pub seed: u64,
}

impl Default for CircuitSpec {
    fn default() -> Self {
        Self {
            width: 4,
            depth: 20,
            two_qubit_weight: 0.5,
            seed: DEFAULT_SEED,
        }
    }
}

impl CircuitSpec {
    /// Check width and weight.
    pub fn validate(&self) -> CircuitResult<()> {
        if self.width == 0 {
            return Err(CircuitError::InvalidWidth(self.width));
        }
        if !(0.0..=1.0).contains(&self.two_qubit_weight) {
            return Err(CircuitError::InvalidWeight(self.two_qubit_weight));
        }
        Ok(())
    }
}

/// Builds random circuits from a private random source.
#[derive(Debug, Clone)]
pub struct CircuitGenerator {
    spec: CircuitSpec,
    rng: PseudoRandomGenerator,
}

impl CircuitGenerator {
    /// Create a generator, validating the parameters.
    pub fn new(spec: CircuitSpec) -> CircuitResult<Self> {
        spec.validate()?;
        Ok(Self {
            rng: PseudoRandomGenerator::new(spec.seed),
            spec,
        })
    }

    /// Parameters this generator was built with.
    pub fn spec(&self) -> &CircuitSpec {
        &self.spec
    }

    /// Generate `depth` gates and pack them into layers.
    ///
    /// Per gate: one `rand()` picks the arity (two qubits when it falls below
    /// the weight and the circuit is wider than one qubit). A one-qubit gate
    /// draws its target, then its matrix. A two-qubit gate draws its first
    /// target, redraws the second until it differs, then draws its matrix.
    /// Fails with [`CircuitError::StalledGenerator`] when no distinct second
    /// target can ever come up.
    #[instrument(skip_all, fields(width = self.spec.width, depth = self.spec.depth))]
    pub fn generate(mut self) -> CircuitResult<QuantumCircuit> {
        let CircuitSpec {
            width,
            depth,
            two_qubit_weight,
            seed,
        } = self.spec;
        let mut circuit = QuantumCircuit::empty(width, depth, two_qubit_weight, seed);

        for _ in 0..depth {
            let op = self.next_operation()?;
            circuit.push(op);
        }

        debug!(
            layers = circuit.num_layers(),
            two_qubit_gates = circuit.num_two_qubit_gates(),
            "generated circuit"
        );
        Ok(circuit)
    }

    fn next_operation(&mut self) -> CircuitResult<QuantumOperation> {
        let r = self.rng.rand(None);
        if r >= self.spec.two_qubit_weight || self.spec.width == 1 {
            let target = self.next_qubit();
            let matrix = self.rng.rand_unitary(Arity::One);
            Ok(OneQubitOperation::new(matrix, &[target])?.into())
        } else {
            let first = self.next_qubit();
            let mut second = self.next_qubit();
            // The stream repeats within m draws; past that it never differs.
            let mut redraws = 0;
            while second == first {
                if redraws == self.rng.m() {
                    return Err(CircuitError::StalledGenerator {
                        seed: self.spec.seed,
                    });
                }
                second = self.next_qubit();
                redraws += 1;
            }
            let matrix = self.rng.rand_unitary(Arity::Two);
            Ok(TwoQubitOperation::new(matrix, &[first, second])?.into())
        }
    }

    fn next_qubit(&mut self) -> QubitId {
        // rand_int() < m, and width >= 1, so the remainder fits in u32.
        QubitId((self.rng.rand_int() % u64::from(self.spec.width)) as u32)
    }
}

/// Generate a random circuit in one call.
pub fn generate(
    width: u32,
    depth: usize,
    two_qubit_weight: f64,
    seed: u64,
) -> CircuitResult<QuantumCircuit> {
    CircuitGenerator::new(CircuitSpec {
        width,
        depth,
        two_qubit_weight,
        seed,
    })?
    .generate()
}
