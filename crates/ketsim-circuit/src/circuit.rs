//! Generated circuits.

use ketsim_core::{Arity, QuantumOperation, QubitId};
use serde::Serialize;
use tracing::trace;

use crate::error::{CircuitError, CircuitResult};
use crate::layer::Layer;

/// A random circuit: gates in generation order plus their layer packing.
///
/// Gates are applied in generation order. The layers only record which gates
/// could run concurrently; a later gate may sit in an earlier layer when it
/// shares no qubit with anything packed after that layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantumCircuit {
    width: u32,
    depth: usize,
    two_qubit_weight: f64,
    seed: u64,
    gates: Vec<QuantumOperation>,
    layers: Vec<Layer>,
}

impl QuantumCircuit {
    pub(crate) fn empty(width: u32, depth: usize, two_qubit_weight: f64, seed: u64) -> Self {
        Self {
            width,
            depth,
            two_qubit_weight,
            seed,
            gates: Vec::with_capacity(depth),
            layers: Vec::new(),
        }
    }

    /// Append a gate and pack it greedily.
    ///
    /// Layers are scanned from the newest backward until one shares a qubit
    /// with the gate. The gate joins the layer right after that one, or the
    /// first layer if none conflicts, opening a new terminal layer when the
    /// slot is past the end.
    pub(crate) fn push(&mut self, op: QuantumOperation) {
        let qubits = op.targets().unwrap_or_default();
        let slot = self
            .layers
            .iter()
            .rposition(|layer| layer.touches_any(&qubits))
            .map_or(0, |blocking| blocking + 1);
        if slot == self.layers.len() {
            self.layers.push(Layer::default());
        }
        let index = self.gates.len();
        self.layers[slot].insert(index, &qubits);
        trace!(gate = index, layer = slot, %op, "packed gate");
        self.gates.push(op);
    }

    /// Number of qubits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of gates requested at generation time.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Probability of drawing a two-qubit gate.
    pub fn two_qubit_weight(&self) -> f64 {
        self.two_qubit_weight
    }

    /// Seed of the random source.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Gates in generation order.
    pub fn gates(&self) -> &[QuantumOperation] {
        &self.gates
    }

    /// Layers in order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of layers.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Gates of layer `index`, in packing order.
    pub fn layer_operations(&self, index: usize) -> CircuitResult<Vec<&QuantumOperation>> {
        let layer = self
            .layers
            .get(index)
            .ok_or(CircuitError::LayerOutOfRange {
                index,
                num_layers: self.layers.len(),
            })?;
        Ok(layer.gate_indices().iter().map(|&i| &self.gates[i]).collect())
    }

    /// Gates regrouped layer by layer.
    ///
    /// Applying these yields the same state as [`gates`](Self::gates), since
    /// gates sharing a qubit keep their relative order.
    pub fn layered_gates(&self) -> impl Iterator<Item = &QuantumOperation> + '_ {
        self.layers
            .iter()
            .flat_map(|layer| layer.gate_indices().iter().map(|&i| &self.gates[i]))
    }

    /// Number of two-qubit gates.
    pub fn num_two_qubit_gates(&self) -> usize {
        self.gates
            .iter()
            .filter(|g| g.arity() == Arity::Two)
            .count()
    }

    /// Whether `qubit` is a valid index for this circuit.
    pub fn contains_qubit(&self, qubit: QubitId) -> bool {
        qubit.0 < self.width
    }
}
