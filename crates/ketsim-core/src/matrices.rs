//! Canonical gate matrices.
//!
//! All matrices are indexed `[row, col]`. For two-qubit matrices the row and
//! column index is `(bit of second target << 1) | bit of first target`.

use ndarray::{Array2, array};
use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Dense complex matrix used for every gate.
pub type Matrix = Array2<Complex64>;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// The `dim × dim` identity.
pub fn identity(dim: usize) -> Matrix {
    Array2::eye(dim)
}

/// Pauli-X.
pub fn pauli_x() -> Matrix {
    array![[ZERO, ONE], [ONE, ZERO]]
}

/// Pauli-Y.
pub fn pauli_y() -> Matrix {
    array![[ZERO, -I], [I, ZERO]]
}

/// Pauli-Z.
pub fn pauli_z() -> Matrix {
    array![[ONE, ZERO], [ZERO, -ONE]]
}

/// Hadamard.
pub fn hadamard() -> Matrix {
    let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
    array![[s, s], [s, -s]]
}

/// T gate (fourth root of Z).
pub fn t() -> Matrix {
    array![[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, PI / 4.0)]]
}

/// Controlled-X; the control is the high-order (second) target.
pub fn cx() -> Matrix {
    array![
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ONE],
        [ZERO, ZERO, ONE, ZERO],
    ]
}

/// Controlled-Z.
pub fn cz() -> Matrix {
    array![
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ONE, ZERO],
        [ZERO, ZERO, ZERO, -ONE],
    ]
}

/// Conjugate transpose.
pub fn dagger(m: &Matrix) -> Matrix {
    m.t().mapv(|z| z.conj())
}

/// Largest elementwise distance between two matrices of equal shape.
///
/// Returns `f64::INFINITY` when the shapes differ.
pub fn max_abs_diff(a: &Matrix, b: &Matrix) -> f64 {
    if a.shape() != b.shape() {
        return f64::INFINITY;
    }
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}

/// Check `Uᴴ U ≈ I` within `tol`.
pub fn is_unitary(m: &Matrix, tol: f64) -> bool {
    let (rows, cols) = m.dim();
    rows == cols && max_abs_diff(&dagger(m).dot(m), &identity(rows)) <= tol
}
