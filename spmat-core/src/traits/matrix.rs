//! Core matrix abstraction traits
//!
//! Read-only access shared by everything that renders or inspects a
//! sparse matrix, independent of how the entries are stored.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use crate::format::Entry;

/// Read-only view of a sparse integer matrix
pub trait SparseMatrixView {
    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored). No bounds
    /// checking is performed.
    fn get_element(&self, row: usize, col: usize) -> Option<i64>;

    /// All stored entries in row-major order
    #[cfg(feature = "alloc")]
    fn entries(&self) -> Vec<Entry>;

    /// Non-zero elements of a row as (col, value), in column order
    #[cfg(feature = "alloc")]
    fn get_row(&self, row_index: usize) -> Vec<(usize, i64)> {
        self.entries()
            .into_iter()
            .filter(|e| e.row == row_index)
            .map(|e| (e.col, e.value))
            .collect()
    }

    /// Non-zero elements of a column as (row, value), in row order
    #[cfg(feature = "alloc")]
    fn get_col(&self, col_index: usize) -> Vec<(usize, i64)> {
        self.entries()
            .into_iter()
            .filter(|e| e.col == col_index)
            .map(|e| (e.row, e.value))
            .collect()
    }

    /// Fraction of positions holding a non-zero value
    fn density(&self) -> f64 {
        let (rows, cols) = self.dimensions();
        let cells = rows as f64 * cols as f64;
        if cells == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / cells
        }
    }
}
