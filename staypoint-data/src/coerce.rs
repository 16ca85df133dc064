//! Lenient conversion of raw cell values.
//!
//! Public datasets store coordinates as numbers or as numeric strings. Cells
//! that cannot be read as a finite number are rejected rather than defaulted.

use serde_json::Value;

/// Read a coordinate cell as a finite `f64`.
pub(crate) fn coordinate(cell: Option<&Value>) -> Option<f64> {
    let value = match cell? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    value.is_finite().then_some(value)
}

/// Read a name cell as trimmed, non-empty text.
pub(crate) fn name(cell: Option<&Value>) -> Option<String> {
    match cell? {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
