//! Error types for spmat operations

use crate::operation::Operation;

/// What was wrong with a line of the text matrix format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// The source ended before both dimension lines were read
    MissingHeader,
    /// A dimension line without a `key=value` shape
    Header,
    /// An entry line not wrapped in parentheses or without three fields
    Entry,
    /// A field that is not a valid integer
    Integer,
}

impl core::fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatErrorKind::MissingHeader => "Missing rows/cols header",
            FormatErrorKind::Header => "Malformed rows/cols header",
            FormatErrorKind::Entry => "Input file has wrong format",
            FormatErrorKind::Integer => "Invalid integer field",
        };
        write!(f, "{msg}")
    }
}

/// Errors that can occur during spmat operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Malformed text input; `line` is 1-based
    Format { line: usize, kind: FormatErrorKind },
    /// Operand shapes are incompatible for the operation
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Entry outside the declared dimensions (strict parsing only);
    /// `line` is 1-based
    IndexOutOfBounds { line: usize, row: usize, col: usize },
    /// An i64 sum or product overflowed
    ArithmeticOverflow,
    /// Operation selector is not add, subtract or multiply
    UnknownOperation,
}

impl SpmatError {
    /// Shorthand for a format error at `line`
    pub const fn format(line: usize, kind: FormatErrorKind) -> Self {
        SpmatError::Format { line, kind }
    }

    /// Whether the error came from reading the text format
    pub const fn is_format(&self) -> bool {
        matches!(self, SpmatError::Format { .. } | SpmatError::IndexOutOfBounds { .. })
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::Format { line, kind } => write!(f, "{kind} (line {line})"),
            SpmatError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "Matrix dimensions do not allow {}: {}x{} and {}x{}",
                operation.noun(),
                left.0,
                left.1,
                right.0,
                right.1
            ),
            SpmatError::IndexOutOfBounds { line, row, col } => write!(
                f,
                "Entry ({row}, {col}) lies outside the matrix dimensions (line {line})"
            ),
            SpmatError::ArithmeticOverflow => write!(f, "Integer overflow in matrix arithmetic"),
            SpmatError::UnknownOperation => write!(f, "Invalid operation selected."),
        }
    }
}

/// Result type for spmat operations
pub type Result<T> = core::result::Result<T, SpmatError>;

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_entry_error_message() {
        let err = SpmatError::format(3, FormatErrorKind::Entry);
        assert_eq!(err.to_string(), "Input file has wrong format (line 3)");
        assert!(err.is_format());
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = SpmatError::DimensionMismatch {
            operation: Operation::Multiply,
            left: (2, 3),
            right: (2, 3),
        };
        assert_eq!(
            err.to_string(),
            "Matrix dimensions do not allow multiplication: 2x3 and 2x3"
        );
        assert!(!err.is_format());
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = SpmatError::IndexOutOfBounds { line: 7, row: 4, col: 0 };
        assert_eq!(
            err.to_string(),
            "Entry (4, 0) lies outside the matrix dimensions (line 7)"
        );
        assert!(err.is_format());
    }
}
