// SPDX-License-Identifier: Apache-2.0

//! Number grammar validation and conversion.
//!
//! Validation is a forward scan over the raw bytes that accepts exactly
//! the JSON number grammar:
//!
//! ```text
//! number := '-'? int frac? exp?
//! int    := '0' | [1-9] [0-9]*
//! frac   := '.' [0-9]+
//! exp    := ('e'|'E') ('+'|'-')? [0-9]+
//! ```
//!
//! Only after the scan succeeds is the matched substring handed to the
//! standard `f64` conversion, so the conversion path never sees input it
//! could mis-parse (e.g. `inf`, `1_000`, leading `+`).

use core::str::FromStr;

use crate::cursor::SliceCursor;
use crate::parse_error::ParseError;
use crate::value::JsonValue;

/// Validates the number grammar at the start of `bytes`.
///
/// Returns the byte length of the matched literal, or `InvalidValue` if
/// the grammar is violated before a complete number is seen.
fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let mut pos = 0;

    if bytes.get(pos) == Some(&b'-') {
        pos += 1;
    }

    match bytes.get(pos) {
        Some(b'0') => {
            pos += 1;
            // Only a lone zero is a valid leading-zero form. "0123" is
            // rejected here outright instead of stopping after the zero
            // and leaving "123" as trailing content.
            if matches!(bytes.get(pos), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
        }
        Some(b'1'..=b'9') => {
            pos += 1;
            while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
                pos += 1;
            }
        }
        _ => return Err(ParseError::InvalidValue),
    }

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        if !matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            return Err(ParseError::InvalidValue);
        }
        while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if !matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            return Err(ParseError::InvalidValue);
        }
        while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }

    Ok(pos)
}

/// Parses a number at the cursor and advances past it.
///
/// The whole validated substring, sign included, goes through the
/// standard string-to-f64 conversion. A magnitude that converts to
/// infinity is reported as `NumberTooBig`; the cursor is left untouched
/// on every error path. Underflow silently converts to zero.
pub(crate) fn parse_number(cursor: &mut SliceCursor<'_>) -> Result<JsonValue, ParseError> {
    let rest = cursor.rest();
    let len = scan_number(rest)?;
    let literal = rest.get(..len).ok_or(ParseError::InvalidValue)?;

    // The scan only accepts ASCII bytes, so both conversions below are
    // infallible in practice; the grammar error is kept as a fallback.
    let text = core::str::from_utf8(literal).map_err(|_| ParseError::InvalidValue)?;
    let parsed = f64::from_str(text).map_err(|_| ParseError::InvalidValue)?;
    if parsed.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }

    cursor.advance_by(len);
    Ok(JsonValue::Number(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Result<usize, ParseError> {
        scan_number(text.as_bytes())
    }

    #[test]
    fn test_scan_integer_forms() {
        assert_eq!(scan("0"), Ok(1));
        assert_eq!(scan("-0"), Ok(2));
        assert_eq!(scan("1"), Ok(1));
        assert_eq!(scan("-10234"), Ok(6));
    }

    #[test]
    fn test_scan_fraction_and_exponent() {
        assert_eq!(scan("1.5"), Ok(3));
        assert_eq!(scan("-0.0"), Ok(4));
        assert_eq!(scan("1e10"), Ok(4));
        assert_eq!(scan("1E+10"), Ok(5));
        assert_eq!(scan("1.234e-10"), Ok(9));
    }

    #[test]
    fn test_scan_stops_at_trailing_content() {
        // Trailing bytes after a complete number are not the scanner's
        // problem; the top level decides whether they are whitespace.
        assert_eq!(scan("0 "), Ok(1));
        assert_eq!(scan("1.5]"), Ok(3));
        assert_eq!(scan("0x0"), Ok(1));
    }

    #[test]
    fn test_scan_rejects_missing_integer_part() {
        assert_eq!(scan(""), Err(ParseError::InvalidValue));
        assert_eq!(scan("-"), Err(ParseError::InvalidValue));
        assert_eq!(scan(".123"), Err(ParseError::InvalidValue));
        assert_eq!(scan("+1"), Err(ParseError::InvalidValue));
        assert_eq!(scan("abc"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_scan_rejects_leading_zero_digits() {
        assert_eq!(scan("0123"), Err(ParseError::InvalidValue));
        assert_eq!(scan("-012"), Err(ParseError::InvalidValue));
        assert_eq!(scan("00"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_scan_rejects_incomplete_fraction() {
        assert_eq!(scan("1."), Err(ParseError::InvalidValue));
        assert_eq!(scan("1.e5"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_scan_rejects_incomplete_exponent() {
        assert_eq!(scan("1e"), Err(ParseError::InvalidValue));
        assert_eq!(scan("1e+"), Err(ParseError::InvalidValue));
        assert_eq!(scan("1E-"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_parse_number_advances_cursor() {
        let mut cursor = SliceCursor::new(b"-1.5e2 ");
        assert_eq!(parse_number(&mut cursor), Ok(JsonValue::Number(-150.0)));
        assert_eq!(cursor.peek(), Some(b' '));
    }

    #[test]
    fn test_parse_number_overflow_leaves_cursor() {
        let mut cursor = SliceCursor::new(b"1e309");
        assert_eq!(parse_number(&mut cursor), Err(ParseError::NumberTooBig));
        assert_eq!(cursor.current_pos(), 0);

        let mut negative = SliceCursor::new(b"-1e309");
        assert_eq!(parse_number(&mut negative), Err(ParseError::NumberTooBig));
        assert_eq!(negative.current_pos(), 0);
    }

    #[test]
    fn test_parse_number_underflow_is_zero() {
        let mut cursor = SliceCursor::new(b"1e-10000");
        assert_eq!(parse_number(&mut cursor), Ok(JsonValue::Number(0.0)));
        assert!(cursor.is_at_end());
    }
}
