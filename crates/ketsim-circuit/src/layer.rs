//! Qubit-disjoint layers.

use ketsim_core::QubitId;
use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};

/// A set of gates that touch pairwise-disjoint qubits.
///
/// Gates are stored as indices into the owning circuit's generation-ordered
/// gate list, in the order they were packed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Layer {
    gates: Vec<usize>,
    #[serde(serialize_with = "serialize_sorted")]
    qubits: FxHashSet<QubitId>,
}

impl Layer {
    /// Whether any of `qubits` is already used in this layer.
    pub fn touches_any(&self, qubits: &[QubitId]) -> bool {
        qubits.iter().any(|q| self.qubits.contains(q))
    }

    /// Record gate `index` acting on `qubits`.
    pub(crate) fn insert(&mut self, index: usize, qubits: &[QubitId]) {
        debug_assert!(!self.touches_any(qubits));
        self.gates.push(index);
        self.qubits.extend(qubits.iter().copied());
    }

    /// Gate indices, in packing order.
    pub fn gate_indices(&self) -> &[usize] {
        &self.gates
    }

    /// Number of gates in the layer.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the layer holds no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Touched qubits in ascending order.
    pub fn qubits(&self) -> Vec<QubitId> {
        let mut qs: Vec<QubitId> = self.qubits.iter().copied().collect();
        qs.sort_unstable();
        qs
    }

    /// Whether `qubit` is used in this layer.
    pub fn contains(&self, qubit: QubitId) -> bool {
        self.qubits.contains(&qubit)
    }
}

fn serialize_sorted<S: Serializer>(
    qubits: &FxHashSet<QubitId>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut qs: Vec<&QubitId> = qubits.iter().collect();
    qs.sort_unstable();
    serializer.collect_seq(qs)
}
