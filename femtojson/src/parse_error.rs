// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur while parsing a scalar JSON document.
///
/// This set is closed: every failure of [`crate::parse`] is one of these
/// codes, and a failed parse never yields a partially constructed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// A malformed literal or number, or an unrecognized leading character.
    InvalidValue,
    /// Non-whitespace content followed an otherwise valid root value.
    RootNotSingular,
    /// A numeric literal whose magnitude overflows the f64 range.
    NumberTooBig,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::ExpectValue => write!(f, "expected a value"),
            ParseError::InvalidValue => write!(f, "invalid value"),
            ParseError::RootNotSingular => write!(f, "root is not singular"),
            ParseError::NumberTooBig => write!(f, "number too big"),
        }
    }
}
