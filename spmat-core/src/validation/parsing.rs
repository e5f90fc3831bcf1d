//! Field parsing for the text matrix format
//!
//! Pure functions over string slices; every failure is reported as a
//! format error carrying the 1-based line number it occurred on.

use crate::format::constants::{
    ENTRY_CLOSE, ENTRY_FIELDS, ENTRY_OPEN, FIELD_SEPARATOR, KEY_SEPARATOR,
};
use crate::{FormatErrorKind, Result, SpmatError};

/// Parse a non-negative index or dimension, surrounding whitespace ignored
pub fn parse_index(field: &str, line: usize) -> Result<usize> {
    field
        .trim()
        .parse::<usize>()
        .map_err(|_| SpmatError::format(line, FormatErrorKind::Integer))
}

/// Parse a signed entry value, surrounding whitespace ignored
pub fn parse_value(field: &str, line: usize) -> Result<i64> {
    field
        .trim()
        .parse::<i64>()
        .map_err(|_| SpmatError::format(line, FormatErrorKind::Integer))
}

/// Return the text after the first `=` of a header line
///
/// Anything after a second `=` is ignored, only the first value segment
/// is returned.
pub fn header_value(line_text: &str, line: usize) -> Result<&str> {
    line_text
        .split(KEY_SEPARATOR)
        .nth(1)
        .ok_or(SpmatError::format(line, FormatErrorKind::Header))
}

/// Whether a trimmed line has the `( ... )` entry shape
pub fn is_entry_line(line_text: &str) -> bool {
    line_text.starts_with(ENTRY_OPEN) && line_text.ends_with(ENTRY_CLOSE)
}

/// Split a trimmed entry line into its three raw fields
///
/// Checks the parenthesis shape first so malformed triples are never
/// split.
pub fn split_entry_fields(line_text: &str, line: usize) -> Result<[&str; ENTRY_FIELDS]> {
    let inner = line_text
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(SpmatError::format(line, FormatErrorKind::Entry))?;

    let mut fields = [""; ENTRY_FIELDS];
    let mut count = 0;

    for field in inner.split(FIELD_SEPARATOR) {
        if count >= ENTRY_FIELDS {
            return Err(SpmatError::format(line, FormatErrorKind::Entry)); // Too many fields
        }
        fields[count] = field.trim();
        count += 1;
    }

    if count < ENTRY_FIELDS {
        return Err(SpmatError::format(line, FormatErrorKind::Entry));
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0", 1), Ok(0));
        assert_eq!(parse_index(" 42 ", 1), Ok(42));
        assert_eq!(parse_index("\t7\n", 1), Ok(7));

        // Invalid cases
        let err = Err(SpmatError::format(4, FormatErrorKind::Integer));
        assert_eq!(parse_index("", 4), err);
        assert_eq!(parse_index("abc", 4), err);
        assert_eq!(parse_index("12a", 4), err);
        assert_eq!(parse_index("-1", 4), err);
        assert_eq!(parse_index("1.5", 4), err);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("5", 1), Ok(5));
        assert_eq!(parse_value(" -17 ", 1), Ok(-17));
        assert_eq!(parse_value("0", 1), Ok(0));

        assert_eq!(
            parse_value("2.0", 9),
            Err(SpmatError::format(9, FormatErrorKind::Integer))
        );
        assert_eq!(
            parse_value("99999999999999999999", 9),
            Err(SpmatError::format(9, FormatErrorKind::Integer))
        );
    }

    #[test]
    fn test_header_value() {
        assert_eq!(header_value("rows=3", 1), Ok("3"));
        assert_eq!(header_value("cols = 12 ", 2), Ok(" 12 "));
        assert_eq!(header_value("rows=3=4", 1), Ok("3"));
        assert_eq!(
            header_value("rows 3", 1),
            Err(SpmatError::format(1, FormatErrorKind::Header))
        );
    }

    #[test]
    fn test_is_entry_line() {
        assert!(is_entry_line("(1, 2, 3)"));
        assert!(is_entry_line("()"));

        assert!(!is_entry_line("[1, 1, 5]"));
        assert!(!is_entry_line("(1, 2, 3"));
        assert!(!is_entry_line("1, 2, 3)"));
        assert!(!is_entry_line("("));
        assert!(!is_entry_line(")"));
    }

    #[test]
    fn test_split_entry_fields() {
        assert_eq!(split_entry_fields("(1, 2, 3)", 3), Ok(["1", "2", "3"]));
        assert_eq!(
            split_entry_fields("( 0 ,4,  -9 )", 3),
            Ok(["0", "4", "-9"])
        );

        let err = Err(SpmatError::format(5, FormatErrorKind::Entry));
        assert_eq!(split_entry_fields("[1, 1, 5]", 5), err);
        assert_eq!(split_entry_fields("(1, 2)", 5), err);
        assert_eq!(split_entry_fields("(1, 2, 3, 4)", 5), err);
        assert_eq!(split_entry_fields("()", 5), err);
    }
}
