//! Validation utilities for the text matrix format and operand shapes
//!
//! Pure functions with no I/O and no allocation.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_coordinate, validate_shapes};
pub use parsing::{is_entry_line, parse_index, parse_value};
