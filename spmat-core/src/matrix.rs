//! Sparse integer matrix backed by a coordinate hash map

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::format::{write_text, Entry, ParseConfig};
use crate::traits::SparseMatrixView;
use crate::Result;

/// Sparse matrix storing only non-zero `i64` values
///
/// # Invariant
///
/// No stored value is ever zero. [`SparseMatrix::set`] is the only
/// mutator and removes a coordinate instead of storing `0`, so `nnz`
/// always equals the number of true non-zero elements.
///
/// Coordinates are not checked against the dimensions; entries outside
/// `rows x cols` are stored like any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    num_rows: usize,
    num_cols: usize,
    entries: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Creates an empty `num_rows x num_cols` matrix
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            entries: HashMap::new(),
        }
    }

    /// Creates an empty matrix with room for `nnz` entries
    pub fn with_capacity(num_rows: usize, num_cols: usize, nnz: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            entries: HashMap::with_capacity(nnz),
        }
    }

    /// Creates a matrix by applying `set` to each (row, col, value) in order
    pub fn from_triplets(num_rows: usize, num_cols: usize, triplets: &[(usize, usize, i64)]) -> Self {
        let mut matrix = Self::with_capacity(num_rows, num_cols, triplets.len());
        for &(row, col, value) in triplets {
            matrix.set(row, col, value);
        }
        matrix
    }

    /// Creates an `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::with_capacity(n, n, n);
        for i in 0..n {
            matrix.set(i, i, 1);
        }
        matrix
    }

    /// Parses a matrix from the text format
    pub fn parse(text: &str) -> Result<Self> {
        crate::format::parse_matrix(text)
    }

    /// Parses a matrix from the text format with explicit options
    pub fn parse_with(text: &str, config: &ParseConfig) -> Result<Self> {
        crate::format::parse_lines_with(text.lines(), config)
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at (row, col), `0` when nothing is stored there
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Whether a non-zero value is stored at (row, col)
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Store `value` at (row, col); a zero removes the coordinate
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        if value != 0 {
            self.entries.insert((row, col), value);
        } else {
            self.entries.remove(&(row, col));
        }
    }

    /// Entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| Entry { row, col, value })
    }

    /// Entries sorted by (row, col)
    pub fn sorted_entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.iter().collect();
        entries.sort_unstable_by_key(Entry::coordinate);
        entries
    }

    /// Renders the matrix in the text format
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl SparseMatrixView for SparseMatrix {
    fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }

    fn get_element(&self, row: usize, col: usize) -> Option<i64> {
        self.entries.get(&(row, col)).copied()
    }

    fn entries(&self) -> Vec<Entry> {
        self.sorted_entries()
    }
}

impl core::fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_text(self, f)
    }
}

impl core::str::FromStr for SparseMatrix {
    type Err = crate::SpmatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
