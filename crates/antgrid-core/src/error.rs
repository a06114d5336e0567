//! Error types for core value construction.

use std::error::Error;
use std::fmt;

/// Errors from parsing a `#rrggbb` colour string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string does not start with `#`.
    MissingHash,
    /// The string has the wrong number of hex digits.
    BadLength {
        /// Number of characters after the `#`.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    InvalidDigit {
        /// The offending input.
        input: String,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash => write!(f, "colour must start with '#'"),
            Self::BadLength { len } => {
                write!(f, "colour must have 6 hex digits, got {len}")
            }
            Self::InvalidDigit { input } => {
                write!(f, "colour '{input}' contains a non-hex digit")
            }
        }
    }
}

impl Error for ParseColorError {}

/// A trail level outside `0..=5` was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelOutOfRange {
    /// The rejected value.
    pub value: i64,
}

impl fmt::Display for LevelOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trail level {} is outside 0..=5", self.value)
    }
}

impl Error for LevelOutOfRange {}
