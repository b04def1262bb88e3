//! Matrix exponential for small dense complex matrices.
//!
//! Scaling and squaring around a truncated Taylor series: the matrix is
//! halved until its 1-norm is at most 1/2, the series is summed until a term
//! vanishes, and the result is squared back up.

use ketsim_core::Matrix;
use ndarray::Array2;
use num_complex::Complex64;

/// Taylor terms are summed until the largest entry drops below this.
const TERM_TOLERANCE: f64 = 1e-18;

/// Hard cap on Taylor terms; 30 is plenty once the norm is at most 1/2.
const MAX_TERMS: u32 = 30;

/// Maximum column sum of absolute values.
pub fn one_norm(m: &Matrix) -> f64 {
    m.columns()
        .into_iter()
        .map(|col| col.iter().map(|z| z.norm()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// `exp(m)` for a square matrix.
///
/// Non-finite input yields non-finite output; nothing is checked.
pub fn expm(m: &Matrix) -> Matrix {
    let dim = m.nrows();

    let mut norm = one_norm(m);
    let mut squarings = 0u32;
    while norm > 0.5 {
        norm /= 2.0;
        squarings += 1;
    }

    let scaled = m.mapv(|z| z / 2f64.powi(squarings as i32));

    let mut result: Matrix = Array2::eye(dim);
    let mut term: Matrix = Array2::eye(dim);
    for k in 1..=MAX_TERMS {
        term = term.dot(&scaled).mapv(|z| z / f64::from(k));
        result += &term;
        let largest = term.iter().map(|z| z.norm()).fold(0.0, f64::max);
        if largest < TERM_TOLERANCE {
            break;
        }
    }

    for _ in 0..squarings {
        result = result.dot(&result);
    }
    result
}

/// `exp(i·h)`; unitary whenever `h` is Hermitian.
pub fn expm_i(h: &Matrix) -> Matrix {
    let i = Complex64::new(0.0, 1.0);
    expm(&h.mapv(|z| z * i))
}
