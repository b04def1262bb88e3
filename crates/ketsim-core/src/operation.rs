//! Validated quantum operations.
//!
//! An operation is an immutable `(matrix, target qubits)` pair. The matrix is
//! `2^k × 2^k` for an operation on `k` targets, and the order of the targets
//! fixes which index bit of the matrix belongs to which qubit: the first
//! target is bit 0, the second target is bit 1.
//!
//! Only one- and two-qubit operations exist. They are separate types, joined
//! by the closed [`QuantumOperation`] enum that emulators dispatch on.
//!
//! Matrices are never checked for unitarity. Random gates are unitary by
//! construction, canonical gates are unitary by definition, and anything
//! else is the caller's business.

use serde::Serialize;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::matrices::{self, Matrix};
use crate::qubit::QubitId;

/// Number of qubits an operation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arity {
    /// Single-qubit operation (2×2 matrix).
    One,
    /// Two-qubit operation (4×4 matrix).
    Two,
}

impl Arity {
    /// Build an arity from a qubit count.
    pub fn from_num_qubits(n: usize) -> CoreResult<Self> {
        match n {
            1 => Ok(Arity::One),
            2 => Ok(Arity::Two),
            other => Err(CoreError::UnsupportedArity(other)),
        }
    }

    /// Number of qubits.
    #[inline]
    pub fn num_qubits(self) -> usize {
        match self {
            Arity::One => 1,
            Arity::Two => 2,
        }
    }

    /// Side length of the matrix, `2^k`.
    #[inline]
    pub fn dimension(self) -> usize {
        1 << self.num_qubits()
    }

    /// The identity matrix of this arity.
    pub fn identity_matrix(self) -> Matrix {
        matrices::identity(self.dimension())
    }

    /// Fail unless `matrix` is exactly `2^k × 2^k`.
    fn check_matrix(self, matrix: &Matrix) -> CoreResult<()> {
        let (rows, cols) = matrix.dim();
        let dim = self.dimension();
        if rows != dim || cols != dim {
            return Err(CoreError::DimensionMismatch {
                arity: self.num_qubits(),
                rows,
                cols,
            });
        }
        Ok(())
    }

    /// Fail unless exactly `k` targets were supplied.
    fn check_targets(self, targets: &[QubitId]) -> CoreResult<()> {
        if targets.len() != self.num_qubits() {
            return Err(CoreError::ArityMismatch {
                expected: self.num_qubits(),
                got: targets.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::One => write!(f, "1q"),
            Arity::Two => write!(f, "2q"),
        }
    }
}

/// A single-qubit operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OneQubitOperation {
    matrix: Matrix,
    /// `None` only for the identity reference operation.
    target: Option<[QubitId; 1]>,
}

impl OneQubitOperation {
    /// Create a single-qubit operation.
    ///
    /// Validates the matrix shape first, then the number of targets.
    pub fn new(matrix: Matrix, targets: &[QubitId]) -> CoreResult<Self> {
        Arity::One.check_matrix(&matrix)?;
        Arity::One.check_targets(targets)?;
        Ok(Self {
            matrix,
            target: Some([targets[0]]),
        })
    }

    fn canonical(matrix: Matrix, target: QubitId) -> Self {
        Self {
            matrix,
            target: Some([target]),
        }
    }

    /// The 2×2 identity with no target qubit bound.
    ///
    /// This is an algebraic reference point only; emulators refuse to apply it.
    pub fn identity() -> Self {
        Self {
            matrix: Arity::One.identity_matrix(),
            target: None,
        }
    }

    /// Pauli-X on `target`.
    pub fn x(target: QubitId) -> Self {
        Self::canonical(matrices::pauli_x(), target)
    }

    /// Pauli-Y on `target`.
    pub fn y(target: QubitId) -> Self {
        Self::canonical(matrices::pauli_y(), target)
    }

    /// Pauli-Z on `target`.
    pub fn z(target: QubitId) -> Self {
        Self::canonical(matrices::pauli_z(), target)
    }

    /// Hadamard on `target`.
    pub fn h(target: QubitId) -> Self {
        Self::canonical(matrices::hadamard(), target)
    }

    /// T gate on `target`.
    pub fn t(target: QubitId) -> Self {
        Self::canonical(matrices::t(), target)
    }

    /// The 2×2 matrix.
    #[inline]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// The target qubit, if bound.
    #[inline]
    pub fn target(&self) -> Option<QubitId> {
        self.target.map(|[q]| q)
    }
}

/// A two-qubit operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoQubitOperation {
    matrix: Matrix,
    /// `None` only for the identity reference operation.
    targets: Option<[QubitId; 2]>,
}

impl TwoQubitOperation {
    /// Create a two-qubit operation.
    ///
    /// Validates the matrix shape, then the number of targets, then that the
    /// two targets differ.
    pub fn new(matrix: Matrix, targets: &[QubitId]) -> CoreResult<Self> {
        Arity::Two.check_matrix(&matrix)?;
        Arity::Two.check_targets(targets)?;
        if targets[0] == targets[1] {
            return Err(CoreError::DuplicateQubit(targets[0]));
        }
        Ok(Self {
            matrix,
            targets: Some([targets[0], targets[1]]),
        })
    }

    /// The 4×4 identity with no target qubits bound.
    pub fn identity() -> Self {
        Self {
            matrix: Arity::Two.identity_matrix(),
            targets: None,
        }
    }

    /// Controlled-X flipping `target` when `control` is set.
    ///
    /// `control` is the second (high-order) target of the matrix.
    pub fn cx(target: QubitId, control: QubitId) -> CoreResult<Self> {
        Self::new(matrices::cx(), &[target, control])
    }

    /// Controlled-Z on `a` and `b` (symmetric).
    pub fn cz(a: QubitId, b: QubitId) -> CoreResult<Self> {
        Self::new(matrices::cz(), &[a, b])
    }

    /// The 4×4 matrix.
    #[inline]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// The ordered targets, if bound.
    #[inline]
    pub fn targets(&self) -> Option<[QubitId; 2]> {
        self.targets
    }
}

/// Any supported quantum operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "arity")]
pub enum QuantumOperation {
    /// Single-qubit operation.
    #[serde(rename = "1q")]
    One(OneQubitOperation),
    /// Two-qubit operation.
    #[serde(rename = "2q")]
    Two(TwoQubitOperation),
}

impl QuantumOperation {
    /// Create an operation, inferring the arity from the matrix size.
    ///
    /// Non-square matrices and matrices whose side is not a power of two fail
    /// with [`CoreError::DimensionMismatch`]; square powers of two other than
    /// 2 and 4 fail with [`CoreError::UnsupportedArity`]; a target list whose
    /// length disagrees with the matrix fails with [`CoreError::ArityMismatch`].
    pub fn from_matrix(matrix: Matrix, targets: &[QubitId]) -> CoreResult<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols || rows < 2 || !rows.is_power_of_two() {
            return Err(CoreError::DimensionMismatch {
                arity: targets.len(),
                rows,
                cols,
            });
        }
        match Arity::from_num_qubits(rows.trailing_zeros() as usize)? {
            Arity::One => OneQubitOperation::new(matrix, targets).map(Self::One),
            Arity::Two => TwoQubitOperation::new(matrix, targets).map(Self::Two),
        }
    }

    /// Identity reference operation of the given arity.
    pub fn identity(arity: Arity) -> Self {
        match arity {
            Arity::One => Self::One(OneQubitOperation::identity()),
            Arity::Two => Self::Two(TwoQubitOperation::identity()),
        }
    }

    /// Arity of this operation.
    #[inline]
    pub fn arity(&self) -> Arity {
        match self {
            Self::One(_) => Arity::One,
            Self::Two(_) => Arity::Two,
        }
    }

    /// The gate matrix.
    #[inline]
    pub fn matrix(&self) -> &Matrix {
        match self {
            Self::One(op) => op.matrix(),
            Self::Two(op) => op.matrix(),
        }
    }

    /// Ordered target qubits, or `None` for an unbound identity.
    pub fn targets(&self) -> Option<Vec<QubitId>> {
        match self {
            Self::One(op) => op.target().map(|q| vec![q]),
            Self::Two(op) => op.targets().map(|qs| qs.to_vec()),
        }
    }

    /// Whether every target slot is bound to a qubit.
    pub fn is_bound(&self) -> bool {
        match self {
            Self::One(op) => op.target.is_some(),
            Self::Two(op) => op.targets.is_some(),
        }
    }

    /// Highest bound target index, if any.
    pub fn max_qubit(&self) -> Option<QubitId> {
        self.targets().and_then(|qs| qs.into_iter().max())
    }
}

impl From<OneQubitOperation> for QuantumOperation {
    fn from(op: OneQubitOperation) -> Self {
        Self::One(op)
    }
}

impl From<TwoQubitOperation> for QuantumOperation {
    fn from(op: TwoQubitOperation) -> Self {
        Self::Two(op)
    }
}

impl fmt::Display for QuantumOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.targets() {
            Some(qs) => {
                let names: Vec<String> = qs.iter().map(ToString::to_string).collect();
                write!(f, "{}({})", self.arity(), names.join(", "))
            }
            None => write!(f, "{}(unbound)", self.arity()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use num_complex::Complex64;

    #[test]
    fn test_arity_from_num_qubits() {
        assert_eq!(Arity::from_num_qubits(1).unwrap(), Arity::One);
        assert_eq!(Arity::from_num_qubits(2).unwrap(), Arity::Two);
        assert_eq!(
            Arity::from_num_qubits(3),
            Err(CoreError::UnsupportedArity(3))
        );
        assert_eq!(
            Arity::from_num_qubits(0),
            Err(CoreError::UnsupportedArity(0))
        );
    }

    #[test]
    fn test_dimension_checked_before_arity() {
        // Wrong matrix and wrong targets: the matrix error wins.
        let err = OneQubitOperation::new(matrices::cx(), &[QubitId(0), QubitId(1)]).unwrap_err();
        assert!(matches!(err, CoreError::DimensionMismatch { arity: 1, rows: 4, cols: 4 }));
    }

    #[test]
    fn test_from_matrix_infers_arity() {
        let op = QuantumOperation::from_matrix(matrices::hadamard(), &[QubitId(2)]).unwrap();
        assert_eq!(op.arity(), Arity::One);
        assert_eq!(op.targets(), Some(vec![QubitId(2)]));

        let op = QuantumOperation::from_matrix(matrices::cz(), &[QubitId(0), QubitId(3)]).unwrap();
        assert_eq!(op.arity(), Arity::Two);
        assert_eq!(op.max_qubit(), Some(QubitId(3)));
    }

    #[test]
    fn test_from_matrix_rejects_eight_by_eight() {
        let m = matrices::identity(8);
        let err =
            QuantumOperation::from_matrix(m, &[QubitId(0), QubitId(1), QubitId(2)]).unwrap_err();
        assert_eq!(err, CoreError::UnsupportedArity(3));
    }

    #[test]
    fn test_from_matrix_rejects_non_square() {
        let m = Array2::<Complex64>::zeros((2, 4));
        let err = QuantumOperation::from_matrix(m, &[QubitId(0)]).unwrap_err();
        assert!(matches!(err, CoreError::DimensionMismatch { rows: 2, cols: 4, .. }));
    }

    #[test]
    fn test_identity_is_unbound() {
        let op = QuantumOperation::identity(Arity::Two);
        assert!(!op.is_bound());
        assert_eq!(op.targets(), None);
        assert_eq!(op.to_string(), "2q(unbound)");
    }

    #[test]
    fn test_display() {
        let op: QuantumOperation = TwoQubitOperation::cx(QubitId(0), QubitId(1)).unwrap().into();
        assert_eq!(op.to_string(), "2q(q0, q1)");
    }
}
