// SPDX-License-Identifier: Apache-2.0

//! A no-heap parser for scalar JSON documents.
//!
//! Parses a document whose root is one of the JSON scalars (`null`,
//! `true`, `false`, or a number) into a [`JsonValue`]. The parser is a
//! plain recursive descent over a borrowed byte cursor: no allocation,
//! no_std, and the first error aborts the whole parse.
//!
//! ```
//! use femtojson::{parse, ParseError, ValueKind};
//!
//! let value = parse(" -1.5e2 ").unwrap();
//! assert_eq!(value.kind(), ValueKind::Number);
//! assert_eq!(value.as_f64(), Some(-150.0));
//!
//! assert_eq!(parse("null x"), Err(ParseError::RootNotSingular));
//! ```

#![cfg_attr(not(test), no_std)]

mod cursor;

mod number;

mod parse_error;
pub use parse_error::ParseError;

mod parser;
pub use parser::parse;

mod value;
pub use value::{JsonValue, ValueKind};
