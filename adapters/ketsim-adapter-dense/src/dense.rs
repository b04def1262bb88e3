//! Dense emulator implementation.

use ketsim_core::{Matrix, QubitId, StateVector};
use ketsim_hal::{Emulator, EmulatorError, EmulatorInfo, EmulatorResult, check_targets};
use ndarray::{Array1, Array2};
use num_complex::Complex64;
use tracing::{debug, instrument};

/// Default capacity: a 10-qubit operator is already 16 MiB.
pub const DEFAULT_MAX_QUBITS: usize = 10;

/// Embed a gate on `targets` into a `num_qubits`-qubit operator.
///
/// The caller has already run [`check_targets`] on the inputs.
///
/// Entry `[r, c]` is zero unless `r` and `c` agree on every non-target bit;
/// otherwise it is `matrix[local(r), local(c)]`, where `local` gathers the
/// target bits with the first target as bit 0.
pub(crate) fn embed(matrix: &Matrix, targets: &[QubitId], num_qubits: usize) -> Matrix {
    let dim = 1usize << num_qubits;
    let target_mask = targets.iter().fold(0, |m, q| m | q.mask());
    let local = |s: usize| {
        targets
            .iter()
            .enumerate()
            .fold(0, |acc, (k, q)| acc | (usize::from(s & q.mask() != 0) << k))
    };

    Array2::from_shape_fn((dim, dim), |(r, c)| {
        if r & !target_mask == c & !target_mask {
            matrix[[local(r), local(c)]]
        } else {
            Complex64::new(0.0, 0.0)
        }
    })
}

/// Reference emulator multiplying full operators.
pub struct DenseEmulator {
    info: EmulatorInfo,
}

impl DenseEmulator {
    /// Create a dense emulator with the default capacity.
    pub fn new() -> Self {
        Self::with_max_qubits(DEFAULT_MAX_QUBITS)
    }

    /// Create a dense emulator with a custom capacity.
    pub fn with_max_qubits(max_qubits: usize) -> Self {
        Self {
            info: EmulatorInfo::new("dense", max_qubits).reference(),
        }
    }
}

impl Default for DenseEmulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Emulator for DenseEmulator {
    fn name(&self) -> &str {
        &self.info.name
    }

    fn info(&self) -> &EmulatorInfo {
        &self.info
    }

    #[instrument(level = "trace", skip(self, matrix, state), fields(num_qubits = state.num_qubits()))]
    fn apply_matrix(
        &self,
        matrix: &Matrix,
        targets: &[QubitId],
        state: &StateVector,
    ) -> EmulatorResult<StateVector> {
        check_targets(matrix, targets, state.num_qubits())?;
        if state.num_qubits() > self.info.max_qubits {
            return Err(EmulatorError::TooManyQubits {
                requested: state.num_qubits(),
                max: self.info.max_qubits,
            });
        }

        let full = embed(matrix, targets, state.num_qubits());
        debug!(dim = full.nrows(), "lifted gate");
        let input = Array1::from(state.amplitudes().to_vec());
        let output = full.dot(&input);
        Ok(StateVector::from_amplitudes(output.to_vec())?)
    }
}
