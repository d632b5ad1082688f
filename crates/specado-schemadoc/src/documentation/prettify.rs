//! Literal value rendering for prose
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde_json::{Number, Value};

/// Render a literal value for interpolation into descriptive text
///
/// Strings are quoted, arrays list their elements unquoted, objects use
/// compact JSON.
pub fn prettify_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(elements) => bracketed(elements),
        other => plain(other),
    }
}

fn bracketed(elements: &[Value]) -> String {
    let inner = elements
        .iter()
        .map(|element| match element {
            Value::String(s) => s.clone(),
            Value::Array(nested) => bracketed(nested),
            other => plain(other),
        })
        .collect::<Vec<_>>()
        .join(",");
    format!("[{}]", inner)
}

fn plain(value: &Value) -> String {
    match value {
        Value::Number(number) => format_number(number),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => "null".to_string(),
        // Objects and anything else fall back to compact JSON.
        other => other.to_string(),
    }
}

/// Render a number the way it reads in a schema document
///
/// Integral floats drop their trailing `.0` and never switch to exponent
/// form, so `2.0` renders as `2` and `1e20` as `100000000000000000000`.
pub fn format_number(number: &Number) -> String {
    if number.is_f64() {
        if let Some(value) = number.as_f64() {
            if value == 0.0 {
                return "0".to_string();
            }
            if value.fract() == 0.0 {
                return format!("{:.0}", value);
            }
        }
    }
    number.to_string()
}
