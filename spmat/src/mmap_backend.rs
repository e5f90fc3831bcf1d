//! Memory-mapped loading of text matrix files
//!
//! Maps the whole file read-only and parses it in place, avoiding a
//! second copy of large inputs.

use crate::error::{Error, Result};
use crate::file_io::open_file;
use memmap2::MmapOptions;
use spmat_core::{parse_lines_with, ParseConfig, SparseMatrix};
use std::path::Path;

/// Map `path` and parse it with default options
pub fn map_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    map_matrix_with(path, &ParseConfig::default())
}

/// Map `path` and parse it
pub fn map_matrix_with<P: AsRef<Path>>(path: P, config: &ParseConfig) -> Result<SparseMatrix> {
    let file = open_file(path.as_ref())?;

    if file.metadata()?.len() == 0 {
        return Ok(parse_lines_with(std::iter::empty::<&str>(), config)?);
    }

    // SAFETY: Read-only mapping; the file is not modified while the map is alive
    let mmap = unsafe { MmapOptions::new().map(&file)? };

    let text = std::str::from_utf8(&mmap).map_err(|err| Error::Utf8 {
        line: line_of_offset(&mmap, err.valid_up_to()),
    })?;

    Ok(parse_lines_with(text.lines(), config)?)
}

/// 1-based line number containing byte `offset`
fn line_of_offset(bytes: &[u8], offset: usize) -> usize {
    bytes[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}
