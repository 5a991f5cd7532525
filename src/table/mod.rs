//! Cost tables and DP lattices.
//!
//! `CostView` is a borrowed 2D view into a 1D `f64` buffer with an explicit
//! stride. Rows are labels; columns are positions for a unary table and labels
//! again for a pairwise table. The stride counts elements between the starts
//! of consecutive rows, so a stride larger than the column count represents
//! padded rows. ROI slices are zero-copy views into the same backing slice and
//! retain the original stride.

use crate::util::{TrellisError, TrellisResult};

mod lattice;
mod owned;

pub use lattice::{AccumulatedCosts, ParentTable};
pub use owned::CostTable;

/// Borrowed 2D cost table with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct CostView<'a> {
    data: &'a [f64],
    rows: usize,
    cols: usize,
    stride: usize,
}

impl<'a> CostView<'a> {
    /// Creates a contiguous view with `stride == cols`.
    pub fn from_slice(data: &'a [f64], rows: usize, cols: usize) -> TrellisResult<Self> {
        Self::new(data, rows, cols, cols)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [f64], rows: usize, cols: usize, stride: usize) -> TrellisResult<Self> {
        let needed = required_len(rows, cols, stride)?;
        if data.len() < needed {
            return Err(TrellisError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            rows,
            cols,
            stride,
        })
    }

    /// Returns the number of rows (labels).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }

    /// Returns the entry at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let idx = row.checked_mul(self.stride)?.checked_add(col)?;
        self.data.get(idx).copied()
    }

    /// Returns a contiguous slice for `row` with length `cols`.
    pub fn row(&self, row: usize) -> Option<&'a [f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row.checked_mul(self.stride)?;
        let end = start.checked_add(self.cols)?;
        self.data.get(start..end)
    }

    /// Iterates over the entries of column `col` from row 0 downwards.
    pub fn column(&self, col: usize) -> Option<impl Iterator<Item = f64> + 'a> {
        if col >= self.cols {
            return None;
        }
        let data = self.data;
        let stride = self.stride;
        Some((0..self.rows).map(move |row| data[row * stride + col]))
    }

    /// Returns the entry at `(row, col)`; callers guarantee the bounds.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.stride + col]
    }

    /// Returns row `row`; callers guarantee the bounds.
    #[inline]
    pub(crate) fn row_at(&self, row: usize) -> &'a [f64] {
        debug_assert!(row < self.rows);
        let start = row * self.stride;
        &self.data[start..start + self.cols]
    }

    /// Copies column `col` into `out`, which holds one slot per row.
    pub(crate) fn gather_column(&self, col: usize, out: &mut [f64]) {
        debug_assert_eq!(out.len(), self.rows);
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = self.at(row, col);
        }
    }

    /// Returns the first non-finite entry in row-major order.
    pub fn find_non_finite(&self) -> Option<(usize, usize, f64)> {
        (0..self.rows).find_map(|r| {
            let row = self.row(r)?;
            row.iter()
                .position(|v| !v.is_finite())
                .map(|c| (r, c, row[c]))
        })
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    pub fn roi(&self, row: usize, col: usize, rows: usize, cols: usize) -> TrellisResult<CostView<'a>> {
        if rows == 0 || cols == 0 {
            return Err(TrellisError::EmptyInput {
                labels: rows,
                positions: cols,
            });
        }

        let out_of_bounds = TrellisError::DimensionMismatch {
            expected_rows: self.rows,
            expected_cols: self.cols,
            rows: row.saturating_add(rows),
            cols: col.saturating_add(cols),
            context: "roi",
        };
        let end_row = row.checked_add(rows).ok_or_else(|| out_of_bounds.clone())?;
        let end_col = col.checked_add(cols).ok_or_else(|| out_of_bounds.clone())?;
        if end_row > self.rows || end_col > self.cols {
            return Err(out_of_bounds);
        }

        let start = row * self.stride + col;
        let data = self
            .data
            .get(start..)
            .ok_or(TrellisError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;

        CostView::new(data, rows, cols, self.stride)
    }
}

fn required_len(rows: usize, cols: usize, stride: usize) -> TrellisResult<usize> {
    if rows == 0 || cols == 0 {
        return Err(TrellisError::EmptyInput {
            labels: rows,
            positions: cols,
        });
    }
    if stride < cols {
        return Err(TrellisError::InvalidStride { cols, stride });
    }
    (rows - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(cols))
        .ok_or(TrellisError::BufferTooSmall {
            needed: usize::MAX,
            got: 0,
        })
}

#[cfg(test)]
mod tests {
    use super::CostView;
    use crate::util::TrellisError;

    #[test]
    fn padded_view_skips_row_padding() {
        let data = [1.0, 2.0, 99.0, 3.0, 4.0, 99.0];
        let view = CostView::new(&data, 2, 2, 3).unwrap();
        assert_eq!(view.row(1).unwrap(), &[3.0, 4.0]);
        assert_eq!(view.column(1).unwrap().collect::<Vec<_>>(), vec![2.0, 4.0]);
        assert_eq!(view.find_non_finite(), None);
    }

    #[test]
    fn find_non_finite_reports_first_in_row_major_order() {
        let data = [0.0, 1.0, f64::INFINITY, f64::NAN];
        let view = CostView::from_slice(&data, 2, 2).unwrap();
        let (row, col, value) = view.find_non_finite().unwrap();
        assert_eq!((row, col), (1, 0));
        assert!(value.is_infinite());
    }

    #[test]
    fn roi_rejects_out_of_bounds() {
        let data = [0.0; 6];
        let view = CostView::from_slice(&data, 2, 3).unwrap();
        let err = view.roi(1, 1, 2, 2).unwrap_err();
        assert!(matches!(err, TrellisError::DimensionMismatch { context: "roi", .. }));
    }
}
