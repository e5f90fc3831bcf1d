//! Sparse matrix arithmetic
//!
//! Every operation validates operand shapes up front and returns a new
//! matrix; operands are never mutated. All writes go through
//! [`SparseMatrix::set`], so a sum that cancels to zero leaves no entry.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::validation::bounds::{validate_product_shape, validate_same_shape};
use crate::{Operation, Result, SparseMatrix, SpmatError};

impl SparseMatrix {
    /// Element-wise sum over the union of both operands' non-zeros
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        validate_same_shape(Operation::Add, self.dimensions(), other.dimensions())?;
        self.combine(other, i64::checked_add)
    }

    /// Element-wise difference over the union of both operands' non-zeros
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        validate_same_shape(Operation::Subtract, self.dimensions(), other.dimensions())?;
        self.combine(other, i64::checked_sub)
    }

    /// Matrix product `self x other`
    ///
    /// Visits each non-zero of `self` against the non-zeros of the matching
    /// row of `other`, so the cost is proportional to the number of
    /// non-zero products rather than to `other`'s column count.
    ///
    /// Partial sums are kept in `i128`, so only a final cell value that
    /// does not fit in `i64` is an overflow, whatever order the entries
    /// are visited in.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        validate_product_shape(self.dimensions(), other.dimensions())?;

        let rows_of_other = other.row_index();
        let mut sums: HashMap<(usize, usize), i128> = HashMap::new();

        for a in self.iter() {
            let Some(row) = rows_of_other.get(&a.col) else {
                continue;
            };
            for &(k, b) in row {
                let sum = sums.entry((a.row, k)).or_insert(0);
                *sum = sum
                    .checked_add(i128::from(a.value) * i128::from(b))
                    .ok_or(SpmatError::ArithmeticOverflow)?;
            }
        }

        let mut result = SparseMatrix::with_capacity(self.num_rows(), other.num_cols(), sums.len());
        for ((row, col), sum) in sums {
            let value = i64::try_from(sum).map_err(|_| SpmatError::ArithmeticOverflow)?;
            result.set(row, col, value);
        }

        Ok(result)
    }

    /// Apply `operation` with `self` as the left operand
    pub fn apply(&self, operation: Operation, other: &SparseMatrix) -> Result<SparseMatrix> {
        match operation {
            Operation::Add => self.add(other),
            Operation::Subtract => self.subtract(other),
            Operation::Multiply => self.multiply(other),
        }
    }

    /// Combine coordinate-wise, treating absent values as zero
    fn combine<F>(&self, other: &SparseMatrix, op: F) -> Result<SparseMatrix>
    where
        F: Fn(i64, i64) -> Option<i64>,
    {
        let mut result =
            SparseMatrix::with_capacity(self.num_rows(), self.num_cols(), self.nnz().max(other.nnz()));

        for a in self.iter() {
            let value = op(a.value, other.get(a.row, a.col)).ok_or(SpmatError::ArithmeticOverflow)?;
            result.set(a.row, a.col, value);
        }
        for b in other.iter().filter(|b| !self.contains(b.row, b.col)) {
            let value = op(0, b.value).ok_or(SpmatError::ArithmeticOverflow)?;
            result.set(b.row, b.col, value);
        }

        Ok(result)
    }

    /// Group entries by row: row -> [(col, value)]
    ///
    /// Entries in columns past `num_cols` are left out; they cannot take
    /// part in a product.
    fn row_index(&self) -> HashMap<usize, Vec<(usize, i64)>> {
        let mut rows: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        for entry in self.iter().filter(|e| e.col < self.num_cols()) {
            rows.entry(entry.row).or_default().push((entry.col, entry.value));
        }
        rows
    }
}
