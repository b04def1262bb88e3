//! Cross-validation of the kernel against the dense reference emulator.

use ketsim_adapter_dense::DenseEmulator;
use ketsim_adapter_sim::KernelEmulator;
use ketsim_circuit::{PseudoRandomGenerator, generate};
use ketsim_core::{Arity, QubitId, StateVector};
use ketsim_hal::{Emulator, EmulatorError};
use num_complex::Complex64;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOL: f64 = 1e-9;

fn random_state(num_qubits: usize, seed: u64) -> StateVector {
    let mut rng = StdRng::seed_from_u64(seed);
    let amps: Vec<Complex64> = (0..1usize << num_qubits)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    StateVector::from_amplitudes(amps).unwrap()
}

fn max_diff(a: &StateVector, b: &StateVector) -> f64 {
    a.amplitudes()
        .iter()
        .zip(b.amplitudes())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}

// ---------------------------------------------------------------------------
// Fixed cases
// ---------------------------------------------------------------------------

#[test]
fn seeded_unitaries_on_every_target_pair() {
    let mut rng = PseudoRandomGenerator::default();
    let kernel = KernelEmulator::new();
    let dense = DenseEmulator::new();
    let state = random_state(4, 3);

    for a in 0..4 {
        let u = rng.rand_unitary(Arity::One);
        let k = kernel.apply_matrix(&u, &[QubitId(a)], &state).unwrap();
        let d = dense.apply_matrix(&u, &[QubitId(a)], &state).unwrap();
        assert!(max_diff(&k, &d) < TOL);

        for b in (0..4).filter(|&b| b != a) {
            let u = rng.rand_unitary(Arity::Two);
            let targets = [QubitId(a), QubitId(b)];
            let k = kernel.apply_matrix(&u, &targets, &state).unwrap();
            let d = dense.apply_matrix(&u, &targets, &state).unwrap();
            assert!(max_diff(&k, &d) < TOL, "targets ({a}, {b})");
        }
    }
}

#[test]
fn both_report_same_validation_errors() {
    let kernel = KernelEmulator::new();
    let dense = DenseEmulator::new();
    let circuit = generate(3, 4, 0.5, 27).unwrap();
    let state = StateVector::new(4).unwrap();
    let expected = Err(EmulatorError::SizeMismatch {
        circuit_width: 3,
        state_qubits: 4,
    });
    assert_eq!(kernel.apply_circuit(&circuit, &state), expected);
    assert_eq!(dense.apply_circuit(&circuit, &state), expected);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn kernel_matches_dense_on_random_circuits(
        width in 1u32..=5,
        depth in 0usize..=25,
        weight in 0.0f64..=1.0,
        seed in 0u64..65537,
        state_seed in any::<u64>(),
    ) {
        let circuit = generate(width, depth, weight, seed).unwrap();
        let state = random_state(width as usize, state_seed);
        let k = KernelEmulator::new().apply_circuit(&circuit, &state).unwrap();
        let d = DenseEmulator::new().apply_circuit(&circuit, &state).unwrap();
        let diff = max_diff(&k, &d);
        prop_assert!(diff < 1e-8, "deviation {}", diff);
    }
}
