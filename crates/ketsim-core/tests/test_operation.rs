//! Tests for canonical gates and operation validation.

use ketsim_core::matrices::{self, Matrix};
use ketsim_core::{Arity, CoreError, OneQubitOperation, QuantumOperation, QubitId, TwoQubitOperation};
use num_complex::Complex64;

const TOL: f64 = 1e-12;

fn close(a: &Matrix, b: &Matrix) -> bool {
    matrices::max_abs_diff(a, b) < TOL
}

fn scale(m: &Matrix, s: Complex64) -> Matrix {
    m.mapv(|z| z * s)
}

fn paulis() -> [Matrix; 3] {
    [matrices::pauli_x(), matrices::pauli_y(), matrices::pauli_z()]
}

// ---------------------------------------------------------------------------
// Pauli algebra
// ---------------------------------------------------------------------------

#[test]
fn paulis_square_to_identity() {
    let id = matrices::identity(2);
    for p in paulis() {
        assert!(close(&p.dot(&p), &id));
    }
}

#[test]
fn pauli_products() {
    let [x, y, z] = paulis();
    let i = Complex64::new(0.0, 1.0);
    assert!(close(&x.dot(&y), &scale(&z, i)));
    assert!(close(&z.dot(&x), &scale(&y, i)));
    assert!(close(&y.dot(&z), &scale(&x, i)));
}

#[test]
fn paulis_anticommute() {
    let ps = paulis();
    let zero = Matrix::zeros((2, 2));
    for a in 0..3 {
        for b in (a + 1)..3 {
            let anti = ps[a].dot(&ps[b]) + ps[b].dot(&ps[a]);
            assert!(close(&anti, &zero), "paulis {a} and {b} commute");
        }
    }
}

#[test]
fn paulis_traceless_and_self_adjoint() {
    for p in paulis() {
        assert!(p.diag().sum().norm() < TOL);
        assert!(close(&matrices::dagger(&p), &p));
    }
}

// ---------------------------------------------------------------------------
// Identity reference operations
// ---------------------------------------------------------------------------

#[test]
fn identity_shapes() {
    assert_eq!(OneQubitOperation::identity().matrix().dim(), (2, 2));
    assert_eq!(TwoQubitOperation::identity().matrix().dim(), (4, 4));
    assert!(close(
        QuantumOperation::identity(Arity::Two).matrix(),
        &matrices::identity(4)
    ));
}

#[test]
fn identity_has_no_targets() {
    assert_eq!(OneQubitOperation::identity().target(), None);
    assert_eq!(TwoQubitOperation::identity().targets(), None);
}

// ---------------------------------------------------------------------------
// Construction errors
// ---------------------------------------------------------------------------

#[test]
fn one_qubit_rejects_four_by_four() {
    let err = OneQubitOperation::new(matrices::cz(), &[QubitId(0)]).unwrap_err();
    assert_eq!(
        err,
        CoreError::DimensionMismatch {
            arity: 1,
            rows: 4,
            cols: 4
        }
    );
}

#[test]
fn one_qubit_rejects_two_targets() {
    let err = OneQubitOperation::new(matrices::pauli_x(), &[QubitId(0), QubitId(1)]).unwrap_err();
    assert_eq!(err, CoreError::ArityMismatch { expected: 1, got: 2 });
}

#[test]
fn two_qubit_rejects_one_target() {
    let err = TwoQubitOperation::new(matrices::cx(), &[QubitId(0)]).unwrap_err();
    assert_eq!(err, CoreError::ArityMismatch { expected: 2, got: 1 });
}

#[test]
fn two_qubit_rejects_repeated_target() {
    let err = TwoQubitOperation::cz(QubitId(2), QubitId(2)).unwrap_err();
    assert_eq!(err, CoreError::DuplicateQubit(QubitId(2)));
}

#[test]
fn from_matrix_arity_mismatch() {
    let err = QuantumOperation::from_matrix(matrices::hadamard(), &[]).unwrap_err();
    assert_eq!(err, CoreError::ArityMismatch { expected: 1, got: 0 });
}

#[test]
fn non_unitary_matrix_is_accepted() {
    let m = Matrix::from_elem((2, 2), Complex64::new(2.0, 0.0));
    assert!(OneQubitOperation::new(m, &[QubitId(0)]).is_ok());
}

#[test]
fn canonical_gates_keep_target_order() {
    let cx = TwoQubitOperation::cx(QubitId(3), QubitId(1)).unwrap();
    assert_eq!(cx.targets(), Some([QubitId(3), QubitId(1)]));
    assert_eq!(OneQubitOperation::t(QubitId(4)).target(), Some(QubitId(4)));
}
