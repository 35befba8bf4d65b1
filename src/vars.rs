//! Variable sets handed to the renderer.

use indexmap::IndexMap;
use serde_json::Value;

use crate::constants::PROMPT_PREFIX;
use crate::error::{Error, Result};

/// Variables available to every pattern, kept in definition order.
pub type Vars = IndexMap<String, Value>;

/// Returns true when the variable is meant to be asked for before applying.
pub fn is_prompted(key: &str) -> bool {
    key.starts_with(PROMPT_PREFIX)
}

/// Converts a prompted answer to the type of the value it replaces.
///
/// Numbers stay numbers: an empty answer means zero, integers are kept
/// integral and anything else has to parse as a float. Every other kind of
/// value is replaced by the answer as a string.
pub fn coerce_answer(key: &str, current: &Value, answer: &str) -> Result<Value> {
    let answer = answer.trim();
    if !current.is_number() {
        return Ok(Value::String(answer.to_string()));
    }

    let answer = if answer.is_empty() { "0" } else { answer };
    if let Ok(int) = answer.parse::<i64>() {
        return Ok(Value::from(int));
    }

    answer
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| Error::InvalidAnswerError {
            key: key.to_string(),
            value: answer.to_string(),
        })
}

/// Short, human readable name of a value's type.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}
