//! Borrowing stride-offset-count views over a matrix buffer.
//!
//! A view describes a sub-sequence of a flat buffer as an
//! (offset, count, stride) triple without copying: element `k` of the view
//! lives at buffer offset `offset + k * stride`. A matrix row is a view with
//! stride 1; a matrix column is a view whose stride is the column count of
//! the source.

use crate::{MatrixError, Result};

/// Validate that every element the view addresses stays inside the buffer.
fn validate_bounds<T>(data: &[T], offset: usize, len: usize, stride: usize) -> Result<()> {
    if len == 0 {
        return Ok(());
    }
    if stride == 0 {
        return Err(MatrixError::ZeroStride);
    }
    let last = (len - 1)
        .checked_mul(stride)
        .and_then(|span| span.checked_add(offset))
        .ok_or(MatrixError::IndexOutOfRange {
            index: usize::MAX,
            bound: data.len(),
        })?;
    if last >= data.len() {
        return Err(MatrixError::IndexOutOfRange {
            index: last,
            bound: data.len(),
        });
    }
    Ok(())
}

/// An immutable strided view over a buffer.
///
/// # Example
/// ```rust
/// use densemat::StridedView;
///
/// let data = vec![1, 2, 3, 4, 5, 6];
/// // The middle column of a 2 x 3 row-major matrix: offset 1, count 2, stride 3.
/// let col = StridedView::new(&data, 1, 2, 3).unwrap();
/// assert_eq!(col.to_vec(), vec![2, 5]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StridedView<'a, T> {
    data: &'a [T],
    offset: usize,
    len: usize,
    stride: usize,
}

impl<'a, T> StridedView<'a, T> {
    /// Create a view of `len` elements starting at `offset`, `stride` apart.
    ///
    /// # Errors
    /// Fails with [`MatrixError::IndexOutOfRange`] if the view would address
    /// memory past the end of `data`, and with [`MatrixError::ZeroStride`]
    /// for a zero stride on a non-empty view.
    pub fn new(data: &'a [T], offset: usize, len: usize, stride: usize) -> Result<Self> {
        validate_bounds(data, offset, len, stride)?;
        // Empty views carry canonical offset 0 and stride 1.
        let (offset, stride) = if len == 0 { (0, 1) } else { (offset, stride) };
        Ok(Self {
            data,
            offset,
            len,
            stride,
        })
    }

    /// Number of elements addressed by the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the view addresses no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance in buffer elements between consecutive view elements.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Buffer offset of the first view element.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Iterate over the viewed elements by reference.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> {
        let data: &'a [T] = self.data;
        data[self.offset..]
            .iter()
            .step_by(self.stride)
            .take(self.len)
    }
}

impl<T: Copy> StridedView<'_, T> {
    /// Get element `k` of the view, by value.
    ///
    /// # Panics
    /// Panics if `k >= self.len()`.
    #[inline]
    pub fn get(&self, k: usize) -> T {
        assert!(k < self.len, "index out of bounds");
        self.data[self.offset + k * self.stride]
    }

    /// Copy the viewed elements into an independent `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }
}

/// A mutable strided view over a buffer.
///
/// Same addressing as [`StridedView`]; writes through the view mutate the
/// source buffer.
#[derive(Debug)]
pub struct StridedViewMut<'a, T> {
    data: &'a mut [T],
    offset: usize,
    len: usize,
    stride: usize,
}

impl<'a, T> StridedViewMut<'a, T> {
    /// Create a mutable view of `len` elements starting at `offset`,
    /// `stride` apart.
    ///
    /// # Errors
    /// Same conditions as [`StridedView::new`].
    pub fn new(data: &'a mut [T], offset: usize, len: usize, stride: usize) -> Result<Self> {
        validate_bounds(data, offset, len, stride)?;
        let (offset, stride) = if len == 0 { (0, 1) } else { (offset, stride) };
        Ok(Self {
            data,
            offset,
            len,
            stride,
        })
    }

    /// Number of elements addressed by the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the view addresses no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance in buffer elements between consecutive view elements.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Iterate over the viewed elements by mutable reference.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data[self.offset..]
            .iter_mut()
            .step_by(self.stride)
            .take(self.len)
    }

    /// Reborrow as an immutable view.
    pub fn as_view(&self) -> StridedView<'_, T> {
        StridedView {
            data: &*self.data,
            offset: self.offset,
            len: self.len,
            stride: self.stride,
        }
    }
}

impl<T: Copy> StridedViewMut<'_, T> {
    /// Get element `k` of the view, by value.
    ///
    /// # Panics
    /// Panics if `k >= self.len()`.
    #[inline]
    pub fn get(&self, k: usize) -> T {
        assert!(k < self.len, "index out of bounds");
        self.data[self.offset + k * self.stride]
    }

    /// Overwrite element `k` of the view.
    ///
    /// # Panics
    /// Panics if `k >= self.len()`.
    #[inline]
    pub fn set(&mut self, k: usize, value: T) {
        assert!(k < self.len, "index out of bounds");
        self.data[self.offset + k * self.stride] = value;
    }

    /// Broadcast-assign `value` to every element of the view.
    pub fn fill(&mut self, value: T) {
        for slot in self.iter_mut() {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixError;

    #[test]
    fn test_row_lane() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let row = StridedView::new(&data, 3, 3, 1).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row.stride(), 1);
        assert_eq!(row.to_vec(), vec![4, 5, 6]);
        assert_eq!(row.get(1), 5);
    }

    #[test]
    fn test_col_lane() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let col = StridedView::new(&data, 2, 2, 3).unwrap();
        assert_eq!(col.offset(), 2);
        assert_eq!(col.to_vec(), vec![3, 6]);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let err = StridedView::new(&data, 2, 3, 3).unwrap_err();
        assert_eq!(err, MatrixError::IndexOutOfRange { index: 8, bound: 6 });
    }

    #[test]
    fn test_zero_stride_rejected() {
        let data = vec![1, 2, 3];
        let err = StridedView::new(&data, 0, 2, 0).unwrap_err();
        assert_eq!(err, MatrixError::ZeroStride);
    }

    #[test]
    fn test_empty_view() {
        let data: Vec<i32> = vec![];
        let view = StridedView::new(&data, 0, 0, 1).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn test_fill_writes_through() {
        let mut data = vec![0, 0, 0, 0, 0, 0];
        let mut col = StridedViewMut::new(&mut data, 1, 2, 3).unwrap();
        col.fill(9);
        assert_eq!(data, vec![0, 9, 0, 0, 9, 0]);
    }

    #[test]
    fn test_set_through_view() {
        let mut data = vec![1, 2, 3, 4, 5, 6];
        let mut row = StridedViewMut::new(&mut data, 0, 3, 1).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row.stride(), 1);
        assert!(!row.is_empty());
        row.set(2, 7);
        assert_eq!(row.get(2), 7);
        assert_eq!(data, vec![1, 2, 7, 4, 5, 6]);
    }
}
