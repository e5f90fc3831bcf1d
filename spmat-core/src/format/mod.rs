//! Text format definitions for sparse matrix files
//!
//! Header and entry line grammar are allocation-free; reading whole
//! matrices and rendering them needs the `alloc` feature.

pub mod constants;
pub mod entry;
pub mod header;
#[cfg(feature = "alloc")]
pub mod text;

pub use entry::Entry;
pub use header::MatrixHeader;
#[cfg(feature = "alloc")]
pub use text::{parse_lines, parse_lines_with, parse_matrix, write_text, MatrixParser, ParseConfig};
