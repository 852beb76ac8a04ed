//! Stable codes attached to element-list errors.
//!
//! `E1xx` codes reject the list as a whole. `E2xx` codes point at a single
//! array entry.

use std::fmt;

/// Code carried by every error diagnostic. Warnings have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The list is not valid JSON.
    E100,
    /// The input ends before the list is closed.
    E101,
    /// The top-level value is not an array.
    E102,
    /// A recognized element lacks a required attribute, or an attribute has
    /// the wrong type.
    E200,
    /// An array entry is not an object.
    E201,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
        };
        f.write_str(code)
    }
}
