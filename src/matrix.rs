//! The dense row-major matrix value type.

use std::fmt;

use crate::scalar::Scalar;
use crate::view::{StridedView, StridedViewMut};
use crate::{MatrixError, Result};

/// An owned dense matrix stored in row-major order.
///
/// A `Matrix` is the triple of a row count, a column count and a flat
/// element buffer; element `(i, j)` lives at buffer offset `i * cols + j`.
/// The buffer is owned outright; views borrow it, copies are independent.
///
/// The shape counts can be adjusted independently of the buffer (see
/// [`Matrix::set_row_count`] / [`Matrix::set_col_count`]), so
/// `rows * cols == buffer length` is a checkable property rather than a
/// type-level guarantee; [`Matrix::is_consistent`] reports it on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Assemble a matrix from raw parts, without validating that
    /// `rows * cols` matches `data.len()`.
    pub fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        Self { rows, cols, data }
    }

    /// The stored row count.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The stored column count.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The flat element buffer, row-major.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the flat element buffer.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix, returning its buffer.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Overwrite the stored row count. The buffer is left untouched, so the
    /// matrix may become inconsistent until the count is restored.
    pub fn set_row_count(&mut self, rows: usize) {
        self.rows = rows;
    }

    /// Overwrite the stored column count. The buffer is left untouched, so
    /// the matrix may become inconsistent until the count is restored.
    pub fn set_col_count(&mut self, cols: usize) {
        self.cols = cols;
    }

    /// Check the integrity invariant: `rows * cols == buffer length`.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.rows * self.cols == self.data.len()
    }

    /// Borrow row `i` as a strided view (offset `i * cols`, count `cols`,
    /// stride 1).
    ///
    /// # Errors
    /// Fails with [`MatrixError::IndexOutOfRange`] if `i >= self.rows()`,
    /// or if the addressed cells fall outside an inconsistent buffer.
    pub fn row(&self, i: usize) -> Result<StridedView<'_, T>> {
        if i >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                index: i,
                bound: self.rows,
            });
        }
        StridedView::new(&self.data, i * self.cols, self.cols, 1)
    }

    /// Borrow column `j` as a strided view (offset `j`, count `rows`,
    /// stride `cols`).
    ///
    /// # Errors
    /// Fails with [`MatrixError::IndexOutOfRange`] if `j >= self.cols()`,
    /// or if the addressed cells fall outside an inconsistent buffer.
    pub fn col(&self, j: usize) -> Result<StridedView<'_, T>> {
        if j >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                index: j,
                bound: self.cols,
            });
        }
        StridedView::new(&self.data, j, self.rows, self.cols)
    }

    /// Borrow row `i` mutably; writes through the view mutate this matrix.
    ///
    /// # Errors
    /// Same conditions as [`Matrix::row`].
    pub fn row_mut(&mut self, i: usize) -> Result<StridedViewMut<'_, T>> {
        if i >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                index: i,
                bound: self.rows,
            });
        }
        StridedViewMut::new(&mut self.data, i * self.cols, self.cols, 1)
    }

    /// Borrow column `j` mutably; writes through the view mutate this matrix.
    ///
    /// # Errors
    /// Same conditions as [`Matrix::col`].
    pub fn col_mut(&mut self, j: usize) -> Result<StridedViewMut<'_, T>> {
        if j >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                index: j,
                bound: self.cols,
            });
        }
        StridedViewMut::new(&mut self.data, j, self.rows, self.cols)
    }
}

impl<T: Scalar> Matrix<T> {
    /// Create an all-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create a matrix whose every cell equals `value`.
    ///
    /// The element type is the scalar's own type.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Create a matrix from an ordered sequence of elements.
    ///
    /// The buffer starts zeroed and is overwritten position-by-position, in
    /// row-major order, from the source's own iteration order: a `Vec`
    /// fills in insertion order, a `BTreeSet` in sorted order. A source
    /// shorter than `rows * cols` leaves the remaining cells zero; extra
    /// elements are ignored. Construction never fails.
    pub fn from_iter<I>(rows: usize, cols: usize, source: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut out = Self::zeros(rows, cols);
        for (cell, value) in out.data.iter_mut().zip(source) {
            *cell = value;
        }
        out
    }

    /// Create a matrix by invoking `f` once per cell.
    ///
    /// The buffer starts zeroed and is filled in row-major order with one
    /// call per cell, `rows * cols` calls in total, so a stateful closure
    /// (a counter, a random generator) produces a different value per cell
    /// and does so deterministically.
    ///
    /// # Example
    /// ```rust
    /// use densemat::Matrix;
    ///
    /// let mut next = 0;
    /// let mat = Matrix::from_fn(2, 3, || {
    ///     next += 1;
    ///     next
    /// });
    /// assert_eq!(mat.data(), &[1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut() -> T,
    {
        let mut out = Self::zeros(rows, cols);
        for cell in out.data.iter_mut() {
            *cell = f();
        }
        out
    }

    /// Get element `(i, j)` by value.
    ///
    /// # Panics
    /// Panics if `i >= self.rows()` or `j >= self.cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        self.data[i * self.cols + j]
    }

    /// Overwrite element `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i >= self.rows()` or `j >= self.cols()`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        self.data[i * self.cols + j] = value;
    }

    /// Overwrite element `(i, j)` with the result of `f`, invoked once.
    ///
    /// # Panics
    /// Panics if `i >= self.rows()` or `j >= self.cols()`.
    pub fn set_with<F>(&mut self, i: usize, j: usize, f: F)
    where
        F: FnOnce() -> T,
    {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        self.data[i * self.cols + j] = f();
    }

    /// Broadcast-assign `value` to every cell of row `i`.
    ///
    /// # Errors
    /// Fails with [`MatrixError::IndexOutOfRange`] if `i >= self.rows()`.
    pub fn set_row(&mut self, i: usize, value: T) -> Result<()> {
        self.row_mut(i)?.fill(value);
        Ok(())
    }

    /// Broadcast-assign the result of `f` to every cell of row `i`.
    ///
    /// `f` is invoked exactly once, after the index check; its single result
    /// is broadcast across the row, so any side effects occur once per call
    /// rather than once per column.
    ///
    /// # Errors
    /// Fails with [`MatrixError::IndexOutOfRange`] if `i >= self.rows()`.
    pub fn set_row_with<F>(&mut self, i: usize, f: F) -> Result<()>
    where
        F: FnOnce() -> T,
    {
        let mut lane = self.row_mut(i)?;
        lane.fill(f());
        Ok(())
    }

    /// Broadcast-assign `value` to every cell of column `j`.
    ///
    /// # Errors
    /// Fails with [`MatrixError::IndexOutOfRange`] if `j >= self.cols()`.
    pub fn set_col(&mut self, j: usize, value: T) -> Result<()> {
        self.col_mut(j)?.fill(value);
        Ok(())
    }

    /// Broadcast-assign the result of `f`, invoked exactly once, to every
    /// cell of column `j`.
    ///
    /// # Errors
    /// Fails with [`MatrixError::IndexOutOfRange`] if `j >= self.cols()`.
    pub fn set_col_with<F>(&mut self, j: usize, f: F) -> Result<()>
    where
        F: FnOnce() -> T,
    {
        let mut lane = self.col_mut(j)?;
        lane.fill(f());
        Ok(())
    }

    /// Copy row `i` into an independent `Vec`.
    ///
    /// # Errors
    /// Same conditions as [`Matrix::row`].
    pub fn row_to_vec(&self, i: usize) -> Result<Vec<T>> {
        Ok(self.row(i)?.to_vec())
    }

    /// Copy column `j` into an independent `Vec`.
    ///
    /// # Errors
    /// Same conditions as [`Matrix::col`].
    pub fn col_to_vec(&self, j: usize) -> Result<Vec<T>> {
        Ok(self.col(j)?.to_vec())
    }

    /// Produce a new matrix of identical shape with `f` applied to every
    /// cell. The receiver is not mutated.
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }
}

/// Renders the shape line `(rows x cols)` followed by a right-aligned
/// row-major grid, 16 characters per cell.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "({} x {})", self.rows, self.cols)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:>16}", self.data[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
