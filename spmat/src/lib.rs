//! spmat - sparse integer matrix files and arithmetic
//!
//! This library loads sparse matrices from the line-oriented text format,
//! combines them and writes the results back.
//!
//! ## Architecture
//!
//! spmat follows a specification/implementation separation:
//!
//! - **spmat-core**: Matrix type, text grammar, arithmetic and errors (no I/O)
//! - **spmat**: Readers, memory-mapped loading, JSON snapshots and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{MatrixFile, Operation};
//!
//! fn example() -> spmat::Result<()> {
//!     let left = MatrixFile::read("a.txt")?;
//!     let right = MatrixFile::read("b.txt")?;
//!
//!     let product = left.apply(Operation::Multiply, &right)?;
//!     println!("{product}");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap**: Parse large inputs in place through a read-only memory map
//! - **serde**: JSON snapshots of matrices
//! - **cli**: The `spmat` command-line front end

// Re-export core abstractions and format definitions
pub use spmat_core::{
    // Matrix and views
    SparseMatrix, SparseMatrixView, Entry, MatrixHeader,
    // Parsing
    parse_lines, parse_lines_with, parse_matrix, MatrixParser, ParseConfig,
    // Operations and errors
    Operation, SpmatError, FormatErrorKind,
};

pub mod error;
pub mod file_io;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "mmap")]
pub mod mmap_backend;
#[cfg(feature = "serde")]
pub mod snapshot;

pub use error::{Error, Result};
pub use file_io::{load, load_with, read_matrix, write_matrix, MatrixFile};

#[cfg(feature = "mmap")]
pub use mmap_backend::{map_matrix, map_matrix_with};

#[cfg(feature = "serde")]
pub use snapshot::{from_json, read_json, to_json, write_json, MatrixSnapshot};
