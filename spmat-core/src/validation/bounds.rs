//! Coordinate and shape validation
//!
//! Pure checks on dimensions with no matrix storage involved.

use crate::{Operation, Result, SpmatError};

/// Validate that an entry read on `line` lies inside `(rows, cols)`
pub const fn validate_coordinate(
    row: usize,
    col: usize,
    dims: (usize, usize),
    line: usize,
) -> Result<()> {
    if row >= dims.0 || col >= dims.1 {
        return Err(SpmatError::IndexOutOfBounds { line, row, col });
    }
    Ok(())
}

/// Validate operand shapes for an element-wise operation
pub const fn validate_same_shape(
    operation: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(SpmatError::DimensionMismatch {
            operation,
            left,
            right,
        });
    }
    Ok(())
}

/// Validate operand shapes for a matrix product
pub const fn validate_product_shape(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left.1 != right.0 {
        return Err(SpmatError::DimensionMismatch {
            operation: Operation::Multiply,
            left,
            right,
        });
    }
    Ok(())
}

/// Validate operand shapes for any operation
pub const fn validate_shapes(
    operation: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    match operation {
        Operation::Add | Operation::Subtract => validate_same_shape(operation, left, right),
        Operation::Multiply => validate_product_shape(left, right),
    }
}
