// SPDX-License-Identifier: Apache-2.0

//! Parses a scalar JSON document given on the command line and reports
//! what it contained, going through the public accessor API only.

use femtojson::{parse, ValueKind};

fn main() {
    let input = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            eprintln!("usage: parse_scalar <json>");
            std::process::exit(2);
        }
    };

    match parse(&input) {
        Ok(value) => match value.kind() {
            ValueKind::Null => println!("null"),
            ValueKind::True => println!("true"),
            ValueKind::False => println!("false"),
            ValueKind::Number => {
                println!("number: {}", value.as_f64().unwrap_or_default());
            }
        },
        Err(err) => {
            eprintln!("parse error: {err}");
            std::process::exit(1);
        }
    }
}
