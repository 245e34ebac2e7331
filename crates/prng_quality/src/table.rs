//! Immutable rectangular tables of `f64`, the sole artefact handed to
//! exporters.

use crate::error::{AnalysisError, Result};

/// Row-major table with a fixed column count.
///
/// All rows have the same number of columns. Tables are built once and never
/// mutated; consumers read rows through [`NumericTable::rows`].
///
/// # Examples
///
/// ```rust
/// use prng_quality::NumericTable;
///
/// let table = NumericTable::from_rows(vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]]).unwrap();
/// assert_eq!(table.n_rows(), 2);
/// assert_eq!(table.row(1), Some(&[0.4, 0.5, 0.6][..]));
///
/// assert!(NumericTable::from_rows(vec![vec![1.0], vec![1.0, 2.0]]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NumericTable {
    data: Vec<f64>,
    n_cols: usize,
}

impl NumericTable {
    /// Builds a table from nested rows.
    ///
    /// # Errors
    ///
    /// Returns `RaggedTable` if any row's length differs from the first row,
    /// or `InvalidDimensions` if there are no rows or the rows are empty.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_cols = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || n_cols == 0 {
            return Err(AnalysisError::InvalidDimensions {
                rows: rows.len(),
                cols: n_cols,
            });
        }

        let mut data = Vec::with_capacity(rows.len() * n_cols);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(AnalysisError::RaggedTable {
                    row: index,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self { data, n_cols })
    }

    /// Builds a table from row-major data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if `n_cols` is zero, `data` is empty, or
    /// `data.len()` is not a multiple of `n_cols`.
    pub fn from_flat(data: Vec<f64>, n_cols: usize) -> Result<Self> {
        if n_cols == 0 || data.is_empty() || data.len() % n_cols != 0 {
            return Err(AnalysisError::InvalidDimensions {
                rows: if n_cols == 0 { 0 } else { data.len() / n_cols },
                cols: n_cols,
            });
        }
        Ok(Self { data, n_cols })
    }

    /// Builds a single-column table.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if `values` is empty.
    pub fn column(values: Vec<f64>) -> Result<Self> {
        Self::from_flat(values, 1)
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.data.len() / self.n_cols
    }

    /// Number of columns, shared by every row.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Row `index`, or `None` past the end.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.n_cols)?;
        self.data.get(start..start + self.n_cols)
    }

    /// Cell at `(row, col)`, or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if col >= self.n_cols {
            return None;
        }
        self.row(row).map(|r| r[col])
    }

    /// Iterates rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n_cols)
    }

    /// Iterates column `col` top to bottom. Empty if `col` is out of bounds.
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        let n_rows = if col < self.n_cols { self.n_rows() } else { 0 };
        (0..n_rows).map(move |row| self.data[row * self.n_cols + col])
    }

    /// Row-major view of every cell.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
