//! File I/O for text matrix files
//!
//! Loading streams lines from any [`BufRead`] source into the core
//! [`MatrixParser`], so nothing beyond one line is buffered.

use crate::error::{Error, Result};
use spmat_core::{MatrixParser, ParseConfig, SparseMatrix};
use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Write},
    path::{Path, PathBuf},
};

/// Load a matrix from a line source with default options
pub fn load<R: BufRead>(reader: R) -> Result<SparseMatrix> {
    load_with(reader, &ParseConfig::default())
}

/// Load a matrix from a line source
///
/// Stops at the first malformed line; nothing parsed so far is returned.
pub fn load_with<R: BufRead>(reader: R, config: &ParseConfig) -> Result<SparseMatrix> {
    let mut parser = MatrixParser::new(*config);

    for line in reader.lines() {
        let line = line.map_err(|err| match err.kind() {
            ErrorKind::InvalidData => Error::Utf8 {
                line: parser.lines_read() + 1,
            },
            _ => Error::Io(err),
        })?;
        parser.feed_line(&line)?;
    }

    Ok(parser.finish()?)
}

/// Read a matrix file with default options
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    MatrixFile::read(path)
}

/// Write `matrix` to `path` in the text format, replacing any existing file
///
/// Prints nothing; see [`MatrixFile::write`] for the reporting variant.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{matrix}")?;
    file.flush()?;
    Ok(())
}

/// One-line report of a written matrix
pub(crate) fn written_summary(path: &Path, matrix: &SparseMatrix) -> String {
    format!(
        "Written matrix {}x{} with {} non-zeros to {}",
        matrix.num_rows(),
        matrix.num_cols(),
        matrix.nnz(),
        path.display()
    )
}

/// Open `path` for reading, reporting a missing file as [`Error::NotFound`]
pub(crate) fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(err),
    })
}

/// Text matrix file on disk
#[derive(Debug, Clone)]
pub struct MatrixFile {
    pub path: PathBuf,
}

impl MatrixFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read a matrix file with default options
    pub fn read<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
        Self::new(path).load(&ParseConfig::default())
    }

    /// Read a matrix file with explicit options
    pub fn read_with<P: AsRef<Path>>(path: P, config: &ParseConfig) -> Result<SparseMatrix> {
        Self::new(path).load(config)
    }

    /// Load the matrix stored at this path
    pub fn load(&self, config: &ParseConfig) -> Result<SparseMatrix> {
        let file = open_file(&self.path)?;
        load_with(BufReader::new(file), config)
    }

    /// Write `matrix` in the text format and print a one-line summary
    pub fn write<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
        let path = path.as_ref();
        write_matrix(path, matrix)?;
        println!("{}", written_summary(path, matrix));
        Ok(())
    }
}
