// SPDX-License-Identifier: Apache-2.0

/// The type tag of a parsed JSON scalar, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A `null` literal, or the pre-parse default state.
    Null,
    /// A `true` literal.
    True,
    /// A `false` literal.
    False,
    /// A numeric literal.
    Number,
}

/// A parsed JSON scalar.
///
/// `true` and `false` are distinct variants rather than a single boolean
/// payload, so the tag set matches the JSON scalar grammar one-to-one.
/// The numeric payload only exists under the `Number` tag; it cannot be
/// read through any other variant.
///
/// The default value is `Null`, which is also the state a failed parse
/// leaves behind: [`crate::parse`] returns `Err` without a value, so a
/// caller can never observe a half-built `Number`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JsonValue {
    /// A `null` value.
    #[default]
    Null,
    /// A `true` value.
    True,
    /// A `false` value.
    False,
    /// A number value (e.g. `42` or `-1.5e2`).
    Number(f64),
}

impl JsonValue {
    /// Returns the type tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            JsonValue::Null => ValueKind::Null,
            JsonValue::True => ValueKind::True,
            JsonValue::False => ValueKind::False,
            JsonValue::Number(_) => ValueKind::Number,
        }
    }

    /// True if this value is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns the boolean for the `True`/`False` tags, `None` otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::True => Some(true),
            JsonValue::False => Some(false),
            _ => None,
        }
    }

    /// Returns the numeric payload if this value is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}
