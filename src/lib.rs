//! Dense row-major matrices with strided row/column views.
//!
//! The central type is [`Matrix`], a `(rows, cols, buffer)` value where
//! element `(i, j)` lives at buffer offset `i * cols + j`. Rows and columns
//! are exposed without copying through [`StridedView`] / [`StridedViewMut`],
//! borrowing accessors described by an (offset, count, stride) triple.
//!
//! # Core Types
//!
//! - [`Matrix`]: Owned dense matrix over any [`Scalar`] element type
//! - [`StridedView`] / [`StridedViewMut`]: Zero-copy views of a single row
//!   or column
//! - [`Promote`]: Common-numeric-type resolution for mixed-element
//!   arithmetic
//!
//! # Operations
//!
//! - Construction: [`Matrix::filled`], [`Matrix::from_iter`],
//!   [`Matrix::zeros`], [`Matrix::from_parts`]
//! - Generation: [`Matrix::from_fn`] (one call per cell, row-major order)
//! - Access and mutation: [`Matrix::get`], [`Matrix::row`], [`Matrix::col`],
//!   the `set_*` family
//! - Elementwise transformation: [`Matrix::map`]
//! - Arithmetic: [`add`], [`sub`], [`matmul`], [`dot`]
//!
//! # Example
//!
//! ```rust
//! use densemat::{add, matmul, Matrix};
//!
//! let a = Matrix::from_iter(2, 2, [1.0, 2.0, 3.0, 4.0]);
//! let b = Matrix::filled(2, 2, 1.0);
//!
//! let sum = add(&a, &b).unwrap();
//! assert_eq!(sum.get(1, 1), 5.0);
//!
//! let product = matmul(&a, &b).unwrap();
//! assert_eq!(product.get(0, 0), 3.0);
//! ```
//!
//! # Integrity
//!
//! The invariant `rows * cols == buffer length` is checkable on demand via
//! [`Matrix::is_consistent`] but deliberately not enforced by the type:
//! [`Matrix::set_row_count`] and [`Matrix::set_col_count`] adjust the stored
//! counts without touching the buffer. The arithmetic entry points verify
//! both operands before reading them and fail with
//! [`MatrixError::IntegrityViolation`] on a breached value; everything else
//! trusts the caller.

mod matrix;
mod ops;
mod promote;
mod scalar;
mod view;

// ============================================================================
// Matrix value type
// ============================================================================
pub use matrix::Matrix;

// ============================================================================
// Strided views
// ============================================================================
pub use view::{StridedView, StridedViewMut};

// ============================================================================
// Arithmetic
// ============================================================================
pub use ops::{add, dot, matmul, sub};

// ============================================================================
// Element type machinery
// ============================================================================
pub use promote::Promote;
pub use scalar::Scalar;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during matrix operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// An operand's stored row/column counts disagree with its buffer length.
    #[error("matrix integrity breached: {rows} x {cols} does not match buffer length {len}")]
    IntegrityViolation { rows: usize, cols: usize, len: usize },

    /// Operand shapes differ where elementwise arithmetic requires equality.
    #[error("matrix dimensions do not agree for elementwise arithmetic: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Inner dimensions are incompatible for matrix multiplication.
    #[error(
        "dimensions not compatible for matrix multiplication: \
         left-hand side has {lhs_cols} columns but right-hand side has {rhs_rows} rows"
    )]
    InnerDimensionMismatch { lhs_cols: usize, rhs_rows: usize },

    /// A row or column index past the stored count.
    #[error("index {index} out of range for dimension of size {bound}")]
    IndexOutOfRange { index: usize, bound: usize },

    /// A non-empty view cannot have stride zero.
    #[error("stride must be nonzero for a non-empty view")]
    ZeroStride,
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
