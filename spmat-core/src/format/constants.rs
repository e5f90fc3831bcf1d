//! Tokens and layout constants of the text matrix format

/// Key of the first header line (`rows=<n>`)
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line (`cols=<n>`)
pub const COLS_KEY: &str = "cols";

/// Separator between header key and value
pub const KEY_SEPARATOR: char = '=';

/// Number of header lines before the entry lines start
pub const HEADER_LINES: usize = 2;

/// Entry line delimiters
pub const ENTRY_OPEN: char = '(';
pub const ENTRY_CLOSE: char = ')';

/// Separator between the fields of an entry line
pub const FIELD_SEPARATOR: char = ',';

/// Fields per entry line: row, col, value
pub const ENTRY_FIELDS: usize = 3;

/// Line separator used when rendering
pub const LINE_SEPARATOR: char = '\n';
