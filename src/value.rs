//! Dispatch on the kind of a [`Value`].

use crate::domain::Value;

/// Text gives its length in characters; a number gives twice its value.
pub fn process_value(value: &Value) -> f64 {
    match value {
        Value::Text(text) => text.chars().count() as f64,
        Value::Number(n) => n * 2.0,
    }
}
