#![no_std]

//! spmat core - sparse integer matrices and their text format
//!
//! This crate provides the sparse matrix type, the text format grammar,
//! arithmetic and error definitions. It performs no I/O; see the `spmat`
//! crate for loading and writing files.
//!
//! ```
//! use spmat_core::SparseMatrix;
//!
//! let identity = SparseMatrix::parse("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 1)").unwrap();
//! let m = SparseMatrix::parse("rows=2\ncols=2\n(0, 1, 3)\n(1, 0, 4)").unwrap();
//!
//! let product = identity.multiply(&m).unwrap();
//! assert_eq!(product.to_text(), "rows=2\ncols=2\n(0, 1, 3)\n(1, 0, 4)");
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
#[cfg(feature = "alloc")]
pub mod matrix;
pub mod operation;
#[cfg(feature = "alloc")]
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{Entry, MatrixHeader};
#[cfg(feature = "alloc")]
pub use format::{parse_lines, parse_lines_with, parse_matrix, MatrixParser, ParseConfig};
#[cfg(feature = "alloc")]
pub use matrix::SparseMatrix;
pub use operation::Operation;
pub use traits::SparseMatrixView;
