//! Typed decoding of the client's answer to a position read.
//!
//! The client answers `[scrollLeft, scrollTop]`. Anything else is rejected
//! with a [`ResponseError`] instead of being coerced.

use crate::error::ResponseError;
use crate::position::ScrollPosition;
use serde_json::Value;

/// Decode a client answer into a [`ScrollPosition`].
///
/// Accepts any JSON array with at least two entries whose first two entries
/// are numbers (element 0 is left, element 1 is top). Trailing entries are
/// ignored.
pub fn decode_position(value: &Value) -> Result<ScrollPosition, ResponseError> {
    let Value::Array(items) = value else {
        return Err(ResponseError::NotAnArray {
            found: describe(value),
        });
    };
    if items.len() < 2 {
        return Err(ResponseError::TooShort { len: items.len() });
    }
    let left = number_at(items, 0)?;
    let top = number_at(items, 1)?;
    Ok(ScrollPosition::new(left, top))
}

fn number_at(items: &[Value], index: usize) -> Result<f64, ResponseError> {
    items[index]
        .as_f64()
        .ok_or_else(|| ResponseError::NotNumeric {
            index,
            found: describe(&items[index]),
        })
}

/// Short human-readable description of a JSON value: its kind plus the value.
fn describe(value: &Value) -> String {
    let kind = match value {
        Value::Null => return "null".to_string(),
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    format!("{kind} {value}")
}
