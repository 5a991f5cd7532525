//! Owned contiguous cost tables.

use crate::table::CostView;
use crate::util::{TrellisError, TrellisResult};

/// Owned row-major cost table (`stride == cols`).
#[derive(Clone, Debug, PartialEq)]
pub struct CostTable {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl CostTable {
    /// Creates a table from a row-major buffer of exactly `rows * cols` entries.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> TrellisResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(TrellisError::EmptyInput {
                labels: rows,
                positions: cols,
            });
        }
        let needed = rows.checked_mul(cols).ok_or(TrellisError::BufferTooSmall {
            needed: usize::MAX,
            got: data.len(),
        })?;
        if data.len() < needed {
            return Err(TrellisError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(TrellisError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                rows: data.len().div_ceil(cols),
                cols,
                context: "table buffer",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a table from nested rows; every row must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> TrellisResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        if n_rows == 0 || n_cols == 0 {
            return Err(TrellisError::EmptyInput {
                labels: n_rows,
                positions: n_cols,
            });
        }
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(TrellisError::DimensionMismatch {
                    expected_rows: n_rows,
                    expected_cols: n_cols,
                    rows: n_rows,
                    cols: row.len(),
                    context: "ragged rows",
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(data, n_rows, n_cols)
    }

    /// Creates a table by evaluating `f(row, col)` for every entry.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> TrellisResult<Self> {
        let mut data = Vec::with_capacity(rows.saturating_mul(cols));
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self::new(data, rows, cols)
    }

    /// Creates a table with every entry set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> TrellisResult<Self> {
        Self::from_fn(rows, cols, |_, _| value)
    }

    /// Copies a (possibly strided) view into a contiguous table.
    pub fn from_view(view: CostView<'_>) -> TrellisResult<Self> {
        let mut data = Vec::with_capacity(view.rows() * view.cols());
        for r in 0..view.rows() {
            let row = view.row(r).ok_or(TrellisError::BufferTooSmall {
                needed: (r + 1) * view.stride(),
                got: view.as_slice().len(),
            })?;
            data.extend_from_slice(row);
        }
        Self::new(data, view.rows(), view.cols())
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the row-major backing buffer.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the entry at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.view().get(row, col)
    }

    /// Returns a borrowed view of the table.
    pub fn view(&self) -> CostView<'_> {
        CostView {
            data: &self.data,
            rows: self.rows,
            cols: self.cols,
            stride: self.cols,
        }
    }

    /// Returns the table as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks_exact(self.cols).map(<[f64]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::CostTable;
    use crate::util::TrellisError;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = CostTable::from_rows(&[vec![0.0, 1.0], vec![2.0]]).unwrap_err();
        assert_eq!(
            err,
            TrellisError::DimensionMismatch {
                expected_rows: 2,
                expected_cols: 2,
                rows: 2,
                cols: 1,
                context: "ragged rows",
            }
        );
    }

    #[test]
    fn new_rejects_oversized_buffer() {
        let err = CostTable::new(vec![0.0; 7], 2, 3).unwrap_err();
        assert!(matches!(
            err,
            TrellisError::DimensionMismatch {
                context: "table buffer",
                ..
            }
        ));
    }

    #[test]
    fn from_view_compacts_padded_rows() {
        let data = [1.0, 2.0, -1.0, 3.0, 4.0, -1.0];
        let view = crate::CostView::new(&data, 2, 2, 3).unwrap();
        let table = CostTable::from_view(view).unwrap();
        assert_eq!(table.data(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(table.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }
}
