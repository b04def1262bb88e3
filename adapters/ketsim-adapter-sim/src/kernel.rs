//! Bit-indexed gate application.
//!
//! Every output amplitude is computed independently from the immutable input,
//! so the index loop can be split across threads without synchronisation.

use ketsim_core::{Matrix, QubitId};
use num_complex::Complex64;
use rayon::prelude::*;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Evaluate `amplitude(s)` for every basis index `s < len`.
#[inline]
fn build<F>(len: usize, parallel: bool, amplitude: F) -> Vec<Complex64>
where
    F: Fn(usize) -> Complex64 + Send + Sync,
{
    if parallel {
        (0..len).into_par_iter().map(amplitude).collect()
    } else {
        (0..len).map(amplitude).collect()
    }
}

/// `output[s] = Σ_i input[s with target := i] · M[bit(s, target), i]`.
///
/// The caller guarantees `matrix` is 2×2 and `target` addresses `input`.
pub(crate) fn apply_one_qubit(
    matrix: &Matrix,
    target: QubitId,
    input: &[Complex64],
    parallel: bool,
) -> Vec<Complex64> {
    let mask = target.mask();
    let m = [
        [matrix[[0, 0]], matrix[[0, 1]]],
        [matrix[[1, 0]], matrix[[1, 1]]],
    ];

    build(input.len(), parallel, |s| {
        let row = usize::from(s & mask != 0);
        input[s & !mask] * m[row][0] + input[s | mask] * m[row][1]
    })
}

/// Two-qubit analogue of [`apply_one_qubit`].
///
/// For targets `(q1, q2)` the matrix index is `(bit q2 << 1) | bit q1`.
/// The caller guarantees `matrix` is 4×4 and both targets are distinct and
/// address `input`.
pub(crate) fn apply_two_qubit(
    matrix: &Matrix,
    targets: [QubitId; 2],
    input: &[Complex64],
    parallel: bool,
) -> Vec<Complex64> {
    let low = targets[0].mask();
    let high = targets[1].mask();
    let mut m = [[ZERO; 4]; 4];
    for (r, row) in m.iter_mut().enumerate() {
        for (c, entry) in row.iter_mut().enumerate() {
            *entry = matrix[[r, c]];
        }
    }

    build(input.len(), parallel, |s| {
        let bra = (usize::from(s & high != 0) << 1) | usize::from(s & low != 0);
        let base = s & !(low | high);
        let mut acc = ZERO;
        for (ket, &coeff) in m[bra].iter().enumerate() {
            let mut src = base;
            if ket & 0b01 != 0 {
                src |= low;
            }
            if ket & 0b10 != 0 {
                src |= high;
            }
            acc += input[src] * coeff;
        }
        acc
    })
}
