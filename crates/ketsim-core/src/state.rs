//! Dense state vectors.

use num_complex::Complex64;
use serde::Serialize;
use std::ops::{Index, IndexMut};

use crate::error::{CoreError, CoreResult};

/// Largest qubit count a state vector may be allocated for.
pub const MAX_QUBITS: usize = 32;

/// A dense state vector of `2^n` complex amplitudes.
///
/// Amplitude `s` belongs to the basis state whose qubit `k` equals bit `k` of
/// `s`. The norm is never enforced: amplitudes may be arbitrary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateVector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl StateVector {
    /// Create the all-zero basis state `|0…0⟩` on `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> CoreResult<Self> {
        if num_qubits < 1 {
            return Err(CoreError::MalformedVector(
                "number of qubits must be at least one".into(),
            ));
        }
        if num_qubits > MAX_QUBITS {
            return Err(CoreError::MalformedVector(format!(
                "{num_qubits} qubits exceed the supported maximum of {MAX_QUBITS}"
            )));
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Create a state vector from explicit amplitudes.
    ///
    /// The length must be a power of two and at least 2.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> CoreResult<Self> {
        let len = amplitudes.len();
        if len < 2 || !len.is_power_of_two() {
            return Err(CoreError::MalformedVector(format!(
                "length {len} is not a power of two of at least 2"
            )));
        }
        Ok(Self {
            num_qubits: len.trailing_zeros() as usize,
            amplitudes,
        })
    }

    /// Create a state vector from real amplitudes.
    pub fn from_real(values: &[f64]) -> CoreResult<Self> {
        Self::from_amplitudes(values.iter().map(|&v| Complex64::new(v, 0.0)).collect())
    }

    /// Number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes, `2^n`.
    #[inline]
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Always false: a state vector holds at least two amplitudes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// The amplitudes in basis-index order.
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Consume the vector and return its amplitudes.
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Amplitude of basis state `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    /// Replace every amplitude at once.
    ///
    /// The replacement must have the same length; the qubit count never
    /// changes.
    pub fn set_amplitudes(&mut self, amplitudes: Vec<Complex64>) -> CoreResult<()> {
        if amplitudes.len() != self.amplitudes.len() {
            return Err(CoreError::LengthMismatch {
                expected: self.amplitudes.len(),
                got: amplitudes.len(),
            });
        }
        self.amplitudes = amplitudes;
        Ok(())
    }

    /// Squared L2 norm, `Σ |a_s|²`.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Per-basis-state `|a_s|²`, not normalised.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Render a basis index as a ket label, qubit 0 rightmost.
    pub fn basis_label(&self, index: usize) -> String {
        format!("|{:0width$b}⟩", index, width = self.num_qubits)
    }
}

impl Index<usize> for StateVector {
    type Output = Complex64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.amplitudes[index]
    }
}

impl IndexMut<usize> for StateVector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.amplitudes[index]
    }
}

impl TryFrom<Vec<Complex64>> for StateVector {
    type Error = CoreError;

    fn try_from(amplitudes: Vec<Complex64>) -> CoreResult<Self> {
        Self::from_amplitudes(amplitudes)
    }
}
