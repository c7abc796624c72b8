// SPDX-License-Identifier: Apache-2.0

//! Value dispatch and the top-level parse entry point.

use log::{debug, trace};

use crate::cursor::SliceCursor;
use crate::number::parse_number;
use crate::parse_error::ParseError;
use crate::value::JsonValue;

/// Parses a complete JSON document containing a single scalar value.
///
/// Leading and trailing whitespace is permitted around the value; any
/// other surrounding content fails the whole parse. Errors from the
/// sub-parsers propagate unchanged, and a failed parse never yields a
/// value.
pub fn parse(input: &str) -> Result<JsonValue, ParseError> {
    trace!("parsing {} byte document", input.len());
    let mut cursor = SliceCursor::new(input.as_bytes());

    cursor.skip_whitespace();
    let value = match parse_value(&mut cursor) {
        Ok(value) => value,
        Err(err) => {
            debug!("parse failed at byte {}: {}", cursor.current_pos(), err);
            return Err(err);
        }
    };
    cursor.skip_whitespace();

    if !cursor.is_at_end() {
        debug!("trailing content at byte {}", cursor.current_pos());
        return Err(ParseError::RootNotSingular);
    }
    Ok(value)
}

/// Dispatches on the next byte to the matching value parser.
fn parse_value(cursor: &mut SliceCursor<'_>) -> Result<JsonValue, ParseError> {
    match cursor.peek() {
        Some(b't') => parse_literal(cursor, b"true", JsonValue::True),
        Some(b'f') => parse_literal(cursor, b"false", JsonValue::False),
        Some(b'n') => parse_literal(cursor, b"null", JsonValue::Null),
        None => Err(ParseError::ExpectValue),
        // Everything else is either a number or rejected by its scanner.
        Some(_) => parse_number(cursor),
    }
}

/// Matches one fixed keyword at the cursor and produces its value.
///
/// The dispatcher guarantees the first byte already matches; violating
/// that is a programming error, not a parse failure. Any mismatch in the
/// remaining bytes, including running out of input, is `InvalidValue`.
fn parse_literal(
    cursor: &mut SliceCursor<'_>,
    literal: &'static [u8],
    value: JsonValue,
) -> Result<JsonValue, ParseError> {
    debug_assert_eq!(cursor.peek(), literal.first().copied());
    for &expected in literal {
        if cursor.peek() != Some(expected) {
            return Err(ParseError::InvalidValue);
        }
        cursor.advance();
    }
    Ok(value)
}
