//! Free arithmetic operations on matrices.
//!
//! All three operators validate the integrity of both operands before
//! reading them, then their dimension contracts: addition and subtraction
//! require exactly equal shapes, multiplication requires the left column
//! count to equal the right row count. Operands may use different element
//! types; the result uses their common numeric type (see
//! [`Promote`](crate::Promote)) and multiplication also accumulates in it.

use num_traits::Zero;

use crate::matrix::Matrix;
use crate::promote::Promote;
use crate::scalar::Scalar;
use crate::view::StridedView;
use crate::{MatrixError, Result};

fn ensure_consistent<T>(mat: &Matrix<T>) -> Result<()> {
    if mat.is_consistent() {
        Ok(())
    } else {
        Err(MatrixError::IntegrityViolation {
            rows: mat.rows(),
            cols: mat.cols(),
            len: mat.data().len(),
        })
    }
}

fn elementwise<L, R, F>(
    lhs: &Matrix<L>,
    rhs: &Matrix<R>,
    op: F,
) -> Result<Matrix<<L as Promote<R>>::Output>>
where
    L: Promote<R>,
    R: Scalar,
    F: Fn(
        <L as Promote<R>>::Output,
        <L as Promote<R>>::Output,
    ) -> <L as Promote<R>>::Output,
{
    ensure_consistent(lhs)?;
    ensure_consistent(rhs)?;
    if lhs.rows() != rhs.rows() || lhs.cols() != rhs.cols() {
        return Err(MatrixError::DimensionMismatch {
            lhs: (lhs.rows(), lhs.cols()),
            rhs: (rhs.rows(), rhs.cols()),
        });
    }
    let data = lhs
        .data()
        .iter()
        .zip(rhs.data())
        .map(|(&a, &b)| op(L::promote_lhs(a), L::promote_rhs(b)))
        .collect();
    Ok(Matrix::from_parts(lhs.rows(), lhs.cols(), data))
}

/// Elementwise sum of two same-shape matrices.
///
/// # Errors
/// [`MatrixError::IntegrityViolation`] if either operand's counts disagree
/// with its buffer length; [`MatrixError::DimensionMismatch`] if the shapes
/// differ.
///
/// # Example
/// ```rust
/// use densemat::{add, Matrix};
///
/// let a = Matrix::filled(3, 6, 1i32);
/// let b = Matrix::filled(3, 6, 2i64);
/// let sum = add(&a, &b).unwrap();
/// assert_eq!(sum.get(0, 0), 3i64);
/// ```
pub fn add<L, R>(lhs: &Matrix<L>, rhs: &Matrix<R>) -> Result<Matrix<<L as Promote<R>>::Output>>
where
    L: Promote<R>,
    R: Scalar,
{
    elementwise(lhs, rhs, |a, b| a + b)
}

/// Elementwise difference of two same-shape matrices.
///
/// # Errors
/// Same conditions as [`add`].
pub fn sub<L, R>(lhs: &Matrix<L>, rhs: &Matrix<R>) -> Result<Matrix<<L as Promote<R>>::Output>>
where
    L: Promote<R>,
    R: Scalar,
{
    elementwise(lhs, rhs, |a, b| a - b)
}

/// Dot product of two strided views, accumulated in the common type.
///
/// Pairs elements up to the length of the shorter view.
pub fn dot<L, R>(lhs: &StridedView<'_, L>, rhs: &StridedView<'_, R>) -> <L as Promote<R>>::Output
where
    L: Promote<R>,
    R: Scalar,
{
    lhs.iter()
        .zip(rhs.iter())
        .map(|(&a, &b)| L::promote_lhs(a) * L::promote_rhs(b))
        .fold(<<L as Promote<R>>::Output>::zero(), |acc, term| acc + term)
}

/// Standard dense matrix product.
///
/// Each output cell `(i, j)` is the [`dot`] product of row `i` of `lhs`
/// (stride 1) and column `j` of `rhs` (stride `rhs.cols()`), two
/// equal-length lanes by the inner-dimension check. Runs the plain triple
/// loop: O(`lhs.rows()` × `rhs.cols()` × `lhs.cols()`).
///
/// # Errors
/// [`MatrixError::IntegrityViolation`] if either operand's counts disagree
/// with its buffer length; [`MatrixError::InnerDimensionMismatch`] if
/// `lhs.cols() != rhs.rows()`.
///
/// # Example
/// ```rust
/// use densemat::{matmul, Matrix};
///
/// let a = Matrix::from_iter(2, 2, [1, 2, 3, 4]);
/// let b = Matrix::from_iter(2, 2, [5, 6, 7, 8]);
/// let product = matmul(&a, &b).unwrap();
/// assert_eq!(product.data(), &[19, 22, 43, 50]);
/// ```
pub fn matmul<L, R>(lhs: &Matrix<L>, rhs: &Matrix<R>) -> Result<Matrix<<L as Promote<R>>::Output>>
where
    L: Promote<R>,
    R: Scalar,
{
    ensure_consistent(lhs)?;
    ensure_consistent(rhs)?;
    if lhs.cols() != rhs.rows() {
        return Err(MatrixError::InnerDimensionMismatch {
            lhs_cols: lhs.cols(),
            rhs_rows: rhs.rows(),
        });
    }
    let mut out = Matrix::zeros(lhs.rows(), rhs.cols());
    for i in 0..lhs.rows() {
        let row = lhs.row(i)?;
        for j in 0..rhs.cols() {
            let col = rhs.col(j)?;
            out.set(i, j, dot(&row, &col));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix, MatrixError, StridedView};

    #[test]
    fn test_add_same_type() {
        let a = Matrix::filled(3, 6, 1);
        let b = Matrix::filled(3, 6, 2);
        let sum = add(&a, &b).unwrap();
        assert_eq!((sum.rows(), sum.cols()), (3, 6));
        assert!(sum.data().iter().all(|&x| x == 3));
    }

    #[test]
    fn test_sub_same_type() {
        let a = Matrix::filled(3, 6, 1);
        let b = Matrix::filled(3, 6, 2);
        let diff = sub(&a, &b).unwrap();
        assert!(diff.data().iter().all(|&x| x == -1));
    }

    #[test]
    fn test_add_promotes_mixed_elements() {
        let a = Matrix::from_iter(2, 2, [1i16, 2, 3, 4]);
        let b = Matrix::filled(2, 2, 10i64);
        let sum = add(&a, &b).unwrap();
        assert_eq!(sum.data(), &[11i64, 12, 13, 14]);
    }

    #[test]
    fn test_elementwise_shape_mismatch() {
        let a = Matrix::<f64>::zeros(2, 3);
        let b = Matrix::<f64>::zeros(3, 2);
        assert_eq!(
            add(&a, &b).unwrap_err(),
            MatrixError::DimensionMismatch {
                lhs: (2, 3),
                rhs: (3, 2),
            }
        );
        assert_eq!(
            sub(&b, &a).unwrap_err(),
            MatrixError::DimensionMismatch {
                lhs: (3, 2),
                rhs: (2, 3),
            }
        );
    }

    #[test]
    fn test_arithmetic_rejects_breached_integrity() {
        let mut a = Matrix::filled(2, 2, 1.0f64);
        a.set_col_count(3);
        let b = Matrix::filled(2, 3, 1.0f64);
        assert_eq!(
            add(&a, &b).unwrap_err(),
            MatrixError::IntegrityViolation {
                rows: 2,
                cols: 3,
                len: 4,
            }
        );
        let c = Matrix::filled(3, 2, 1.0f64);
        assert_eq!(
            matmul(&a, &c).unwrap_err(),
            MatrixError::IntegrityViolation {
                rows: 2,
                cols: 3,
                len: 4,
            }
        );
    }

    #[test]
    fn test_matmul_hand_computed() {
        let a = Matrix::from_iter(2, 2, [1, 2, 3, 4]);
        let b = Matrix::from_iter(2, 2, [5, 6, 7, 8]);
        let product = matmul(&a, &b).unwrap();
        assert_eq!(product.data(), &[19, 22, 43, 50]);
    }

    #[test]
    fn test_matmul_shape_and_inner_dim() {
        let a = Matrix::<i32>::zeros(4, 3);
        let b = Matrix::<i32>::zeros(3, 5);
        let product = matmul(&a, &b).unwrap();
        assert_eq!((product.rows(), product.cols()), (4, 5));

        let bad = Matrix::<i32>::zeros(4, 5);
        assert_eq!(
            matmul(&a, &bad).unwrap_err(),
            MatrixError::InnerDimensionMismatch {
                lhs_cols: 3,
                rhs_rows: 4,
            }
        );
    }

    #[test]
    fn test_matmul_identity() {
        let a = Matrix::from_iter(2, 2, [1.0, 2.0, 3.0, 4.0]);
        let eye = Matrix::from_iter(2, 2, [1.0, 0.0, 0.0, 1.0]);
        let product = matmul(&a, &eye).unwrap();
        assert_eq!(product.data(), a.data());
    }

    #[test]
    fn test_dot_across_strides() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let row = StridedView::new(&data, 0, 3, 1).unwrap();
        let col = StridedView::new(&data, 2, 2, 3).unwrap();
        // [1, 2, 3] . [3, 6] pairs up to the shorter view: 1*3 + 2*6.
        assert_eq!(dot(&row, &col), 15);
    }
}
