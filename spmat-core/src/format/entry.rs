//! Entry lines of the text matrix format: `(<row>, <col>, <value>)`

use crate::validation::parsing::{parse_index, parse_value, split_entry_fields};
use crate::Result;

/// A (row, column, value) triple
///
/// Entries read from a matrix never carry a zero value. An entry parsed
/// from text may: a zero there is an instruction to clear the coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

impl Entry {
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }

    /// Coordinate as a (row, col) key
    pub const fn coordinate(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Parse a trimmed entry line; `line` is its 1-based number
    pub fn parse(line_text: &str, line: usize) -> Result<Self> {
        let [row, col, value] = split_entry_fields(line_text, line)?;
        Ok(Self {
            row: parse_index(row, line)?,
            col: parse_index(col, line)?,
            value: parse_value(value, line)?,
        })
    }
}

impl From<(usize, usize, i64)> for Entry {
    fn from((row, col, value): (usize, usize, i64)) -> Self {
        Self { row, col, value }
    }
}

impl core::fmt::Display for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}
