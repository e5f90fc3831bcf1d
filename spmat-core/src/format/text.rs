//! Line-oriented reader and writer for the text matrix format
//!
//! ```text
//! rows=2
//! cols=2
//! (0, 0, 1)
//!
//! (1, 1, 1)
//! ```
//!
//! The two header lines come first. Every later non-blank line must be an
//! entry wrapped in parentheses; the first line that is not aborts the
//! whole load.

use super::constants::{HEADER_LINES, LINE_SEPARATOR};
use super::entry::Entry;
use super::header::MatrixHeader;
use crate::traits::SparseMatrixView;
use crate::validation::bounds::validate_coordinate;
use crate::validation::parsing::is_entry_line;
use crate::{FormatErrorKind, Result, SparseMatrix, SpmatError};

/// Parsing options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseConfig {
    /// Reject entries outside the declared dimensions
    pub check_bounds: bool,
}

impl ParseConfig {
    /// Config that rejects out-of-bounds entries
    pub fn strict() -> Self {
        Self::default().with_bounds_check(true)
    }

    /// Set bounds checking of entry coordinates
    pub fn with_bounds_check(mut self, check_bounds: bool) -> Self {
        self.check_bounds = check_bounds;
        self
    }
}

/// Incremental parser fed one line at a time
///
/// Lets I/O layers stream lines from any source without buffering the
/// whole input. Lines are numbered from 1 in the order they are fed.
#[derive(Debug, Clone)]
pub struct MatrixParser {
    config: ParseConfig,
    line: usize,
    rows: Option<usize>,
    matrix: Option<SparseMatrix>,
}

impl MatrixParser {
    pub fn new(config: ParseConfig) -> Self {
        Self {
            config,
            line: 0,
            rows: None,
            matrix: None,
        }
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Consume the next line of input
    pub fn feed_line(&mut self, text: &str) -> Result<()> {
        self.line += 1;
        let line = self.line;

        match line {
            1 => {
                self.rows = Some(MatrixHeader::parse_dimension(text, line)?);
            }
            2 => {
                let cols = MatrixHeader::parse_dimension(text, line)?;
                let rows = self
                    .rows
                    .ok_or(SpmatError::format(1, FormatErrorKind::MissingHeader))?;
                self.matrix = Some(SparseMatrix::new(rows, cols));
            }
            _ => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(());
                }
                if !is_entry_line(text) {
                    return Err(SpmatError::format(line, FormatErrorKind::Entry));
                }

                let entry = Entry::parse(text, line)?;
                let matrix = self
                    .matrix
                    .as_mut()
                    .ok_or(SpmatError::format(HEADER_LINES, FormatErrorKind::MissingHeader))?;
                if self.config.check_bounds {
                    validate_coordinate(entry.row, entry.col, matrix.dimensions(), line)?;
                }
                matrix.set(entry.row, entry.col, entry.value);
            }
        }

        Ok(())
    }

    /// Finish parsing and return the matrix
    pub fn finish(self) -> Result<SparseMatrix> {
        self.matrix
            .ok_or(SpmatError::format(self.line + 1, FormatErrorKind::MissingHeader))
    }
}

impl Default for MatrixParser {
    fn default() -> Self {
        Self::new(ParseConfig::default())
    }
}

/// Parse a sequence of lines with explicit options
pub fn parse_lines_with<I, S>(lines: I, config: &ParseConfig) -> Result<SparseMatrix>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = MatrixParser::new(*config);
    for line in lines {
        parser.feed_line(line.as_ref())?;
    }
    parser.finish()
}

/// Parse a sequence of lines with default options
pub fn parse_lines<I, S>(lines: I) -> Result<SparseMatrix>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_lines_with(lines, &ParseConfig::default())
}

/// Parse a complete text matrix
pub fn parse_matrix(text: &str) -> Result<SparseMatrix> {
    parse_lines(text.lines())
}

/// Write a matrix in the text format: header, then one line per entry
pub fn write_text<M, W>(matrix: &M, out: &mut W) -> core::fmt::Result
where
    M: SparseMatrixView + ?Sized,
    W: core::fmt::Write,
{
    let (rows, cols) = matrix.dimensions();
    write!(out, "{}", MatrixHeader::new(rows, cols))?;
    for entry in matrix.entries() {
        write!(out, "{LINE_SEPARATOR}{entry}")?;
    }
    Ok(())
}
