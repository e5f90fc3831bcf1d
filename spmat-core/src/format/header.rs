//! Dimension header of the text matrix format
//!
//! The first two lines of every matrix file declare its shape:
//!
//! ```text
//! rows=<n>
//! cols=<n>
//! ```

use super::constants::{COLS_KEY, KEY_SEPARATOR, ROWS_KEY};
use crate::validation::parsing::{header_value, parse_index};
use crate::Result;

/// Declared matrix dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixHeader {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl MatrixHeader {
    /// Create a header for a `rows x cols` matrix
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Parse one dimension line such as `rows=3`
    ///
    /// Only the value after `=` is checked; the key itself is not
    /// compared against `rows`/`cols`.
    pub fn parse_dimension(line_text: &str, line: usize) -> Result<usize> {
        parse_index(header_value(line_text, line)?, line)
    }

    /// Parse both header lines; `first_line` is the 1-based number of `rows_line`
    pub fn parse(rows_line: &str, cols_line: &str, first_line: usize) -> Result<Self> {
        let rows = Self::parse_dimension(rows_line, first_line)?;
        let cols = Self::parse_dimension(cols_line, first_line + 1)?;
        Ok(Self { rows, cols })
    }

    /// Dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl core::fmt::Display for MatrixHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{ROWS_KEY}{KEY_SEPARATOR}{}\n{COLS_KEY}{KEY_SEPARATOR}{}",
            self.rows, self.cols
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use crate::{FormatErrorKind, SpmatError};
    use alloc::string::ToString;

    #[test]
    fn test_parse_header() {
        assert_eq!(
            MatrixHeader::parse("rows=3", "cols=4", 1),
            Ok(MatrixHeader::new(3, 4))
        );
        assert_eq!(
            MatrixHeader::parse("rows = 10 ", " cols= 0", 1),
            Ok(MatrixHeader::new(10, 0))
        );
    }

    #[test]
    fn test_parse_header_errors() {
        assert_eq!(
            MatrixHeader::parse("rows3", "cols=4", 1),
            Err(SpmatError::format(1, FormatErrorKind::Header))
        );
        assert_eq!(
            MatrixHeader::parse("rows=3", "cols=four", 1),
            Err(SpmatError::format(2, FormatErrorKind::Integer))
        );
        assert_eq!(
            MatrixHeader::parse("rows=-1", "cols=4", 1),
            Err(SpmatError::format(1, FormatErrorKind::Integer))
        );
        assert_eq!(
            MatrixHeader::parse("", "cols=4", 1),
            Err(SpmatError::format(1, FormatErrorKind::Header))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(MatrixHeader::new(2, 5).to_string(), "rows=2\ncols=5");
    }
}
