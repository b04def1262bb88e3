//! The emulator trait.

use ketsim_circuit::QuantumCircuit;
use ketsim_core::{Arity, CoreError, Matrix, QuantumOperation, QubitId, StateVector};
use tracing::{debug, instrument};

use crate::capability::EmulatorInfo;
use crate::error::{EmulatorError, EmulatorResult};

/// Trait for state-vector emulators.
///
/// # Contract
///
/// - `apply_matrix()` MUST validate every input before touching any
///   amplitude, and MUST return a new state, leaving the input untouched.
/// - Validation order is: target range, number of targets, matrix shape,
///   distinct targets. [`check_targets`] implements it.
/// - `apply_gate()` and `apply_circuit()` have default implementations in
///   terms of `apply_matrix()`.
/// - Nothing is normalised: a non-unitary matrix produces whatever the
///   linear map gives.
pub trait Emulator: Send + Sync {
    /// Get the name of this emulator.
    fn name(&self) -> &str;

    /// Get the capabilities of this emulator.
    fn info(&self) -> &EmulatorInfo;

    /// Apply a raw `2^k × 2^k` matrix to the ordered `targets`.
    fn apply_matrix(
        &self,
        matrix: &Matrix,
        targets: &[QubitId],
        state: &StateVector,
    ) -> EmulatorResult<StateVector>;

    /// Apply one operation.
    ///
    /// Fails with [`EmulatorError::UnboundTarget`] for the identity reference
    /// operation.
    fn apply_gate(
        &self,
        op: &QuantumOperation,
        state: &StateVector,
    ) -> EmulatorResult<StateVector> {
        let targets = op.targets().ok_or(EmulatorError::UnboundTarget)?;
        self.apply_matrix(op.matrix(), &targets, state)
    }

    /// Apply a gate sequence in order.
    fn apply_gates(
        &self,
        gates: &[QuantumOperation],
        state: &StateVector,
    ) -> EmulatorResult<StateVector> {
        let mut current = state.clone();
        for op in gates {
            current = self.apply_gate(op, &current)?;
        }
        Ok(current)
    }

    /// Apply every gate of `circuit` in generation order.
    ///
    /// The circuit width must equal the state's qubit count. Layers are not
    /// consulted.
    fn apply_circuit(
        &self,
        circuit: &QuantumCircuit,
        state: &StateVector,
    ) -> EmulatorResult<StateVector> {
        check_width(circuit, state)?;
        self.apply_gates(circuit.gates(), state)
    }
}

/// Fail unless `circuit` and `state` have the same number of qubits.
pub fn check_width(circuit: &QuantumCircuit, state: &StateVector) -> EmulatorResult<()> {
    if circuit.width() as usize != state.num_qubits() {
        return Err(EmulatorError::SizeMismatch {
            circuit_width: circuit.width(),
            state_qubits: state.num_qubits(),
        });
    }
    Ok(())
}

/// Validate a matrix and its targets against a state of `num_qubits` qubits.
///
/// Returns the arity on success.
#[instrument(level = "trace", skip(matrix))]
pub fn check_targets(
    matrix: &Matrix,
    targets: &[QubitId],
    num_qubits: usize,
) -> EmulatorResult<Arity> {
    if let Some(&qubit) = targets.iter().find(|q| q.index() >= num_qubits) {
        debug!(%qubit, num_qubits, "target out of range");
        return Err(EmulatorError::QubitOutOfRange { qubit, num_qubits });
    }
    let arity = match targets.len() {
        1 => Arity::One,
        2 => Arity::Two,
        other => return Err(EmulatorError::UnsupportedArity(other)),
    };
    let (rows, cols) = matrix.dim();
    if rows != arity.dimension() || cols != arity.dimension() {
        return Err(CoreError::DimensionMismatch {
            arity: arity.num_qubits(),
            rows,
            cols,
        }
        .into());
    }
    if arity == Arity::Two && targets[0] == targets[1] {
        return Err(CoreError::DuplicateQubit(targets[0]).into());
    }
    Ok(arity)
}
