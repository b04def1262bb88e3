//! Property tests for random circuit generation and layer packing.

use ketsim_circuit::{CircuitError, QuantumCircuit, generate};
use ketsim_core::{Arity, QubitId};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

fn gate_qubits(circuit: &QuantumCircuit, index: usize) -> Vec<QubitId> {
    circuit.gates()[index].targets().unwrap_or_default()
}

fn assert_layers_disjoint(circuit: &QuantumCircuit) {
    for (l, layer) in circuit.layers().iter().enumerate() {
        let mut seen = FxHashSet::default();
        for &g in layer.gate_indices() {
            for q in gate_qubits(circuit, g) {
                assert!(seen.insert(q), "qubit {q} used twice in layer {l}");
            }
        }
        let mut recorded: Vec<QubitId> = seen.into_iter().collect();
        recorded.sort_unstable();
        assert_eq!(recorded, layer.qubits());
    }
}

// ---------------------------------------------------------------------------
// Fixed cases
// ---------------------------------------------------------------------------

#[test]
fn weight_zero_gives_only_one_qubit_gates() {
    let c = generate(5, 60, 0.0, 27).unwrap();
    assert!(c.gates().iter().all(|g| g.arity() == Arity::One));
}

#[test]
fn weight_one_gives_only_two_qubit_gates() {
    let c = generate(5, 60, 1.0, 27).unwrap();
    assert_eq!(c.num_two_qubit_gates(), 60);
}

#[test]
fn single_qubit_width_ignores_weight() {
    let c = generate(1, 25, 1.0, 27).unwrap();
    assert_eq!(c.num_two_qubit_gates(), 0);
    // Every gate hits qubit 0, so no two share a layer.
    assert_eq!(c.num_layers(), 25);
}

#[test]
fn accessors_report_parameters() {
    let c = generate(3, 7, 0.25, 11).unwrap();
    assert_eq!(c.width(), 3);
    assert_eq!(c.depth(), 7);
    assert_eq!(c.two_qubit_weight(), 0.25);
    assert_eq!(c.seed(), 11);
}

#[test]
fn invalid_parameters() {
    assert_eq!(generate(0, 1, 0.5, 27).unwrap_err(), CircuitError::InvalidWidth(0));
    assert!(matches!(
        generate(3, 1, 2.0, 27),
        Err(CircuitError::InvalidWeight(_))
    ));
}

#[test]
fn circuit_serializes_layers() {
    let c = generate(3, 6, 0.5, 27).unwrap();
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["gates"].as_array().unwrap().len(), 6);
    assert_eq!(
        json["layers"].as_array().unwrap().len(),
        c.num_layers()
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn layers_are_qubit_disjoint(
        width in 1u32..=8,
        depth in 0usize..=60,
        weight in 0.0f64..=1.0,
        seed in 0u64..65537,
    ) {
        let c = generate(width, depth, weight, seed).unwrap();
        assert_layers_disjoint(&c);
    }

    #[test]
    fn gate_count_equals_depth(
        width in 1u32..=8,
        depth in 0usize..=60,
        weight in 0.0f64..=1.0,
        seed in 0u64..65537,
    ) {
        let c = generate(width, depth, weight, seed).unwrap();
        prop_assert_eq!(c.gates().len(), depth);
        let packed: usize = c.layers().iter().map(|l| l.len()).sum();
        prop_assert_eq!(packed, depth);
        prop_assert!(c.num_layers() <= depth);
    }

    #[test]
    fn targets_within_width(
        width in 1u32..=8,
        depth in 1usize..=40,
        weight in 0.0f64..=1.0,
        seed in 0u64..65537,
    ) {
        let c = generate(width, depth, weight, seed).unwrap();
        for g in c.gates() {
            let qs = g.targets().unwrap();
            prop_assert!(qs.iter().all(|q| c.contains_qubit(*q)));
            if qs.len() == 2 {
                prop_assert_ne!(qs[0], qs[1]);
            }
        }
    }

    #[test]
    fn gates_sharing_a_qubit_keep_layer_order(
        width in 1u32..=6,
        depth in 0usize..=40,
        weight in 0.0f64..=1.0,
        seed in 0u64..65537,
    ) {
        let c = generate(width, depth, weight, seed).unwrap();
        let mut layer_of = vec![0usize; depth];
        for (l, layer) in c.layers().iter().enumerate() {
            for &g in layer.gate_indices() {
                layer_of[g] = l;
            }
        }
        for i in 0..depth {
            for j in (i + 1)..depth {
                let qi = gate_qubits(&c, i);
                let qj = gate_qubits(&c, j);
                if qi.iter().any(|q| qj.contains(q)) {
                    prop_assert!(layer_of[i] < layer_of[j]);
                }
            }
        }
    }
}
