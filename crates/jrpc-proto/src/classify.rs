//! Deciding whether a decoded envelope represents success or failure.

use serde_json::Value;

use crate::error::RpcError;
use crate::types::ResponseEnvelope;

/// Classify a decoded response envelope into a result value or an RPC
/// error.
///
/// An `error` member takes precedence over `result`, but only when it
/// holds a usable value: empty or zero-like errors (`null`, `false`,
/// `0`, `""`, `"0"`, `[]`, `{}`) are ignored. An envelope with neither
/// a usable `error` nor a `result` key yields the generic
/// [`RpcError::unknown`].
pub fn classify(envelope: ResponseEnvelope) -> Result<Value, RpcError> {
    if let Some(error) = &envelope.error {
        if is_truthy(error) {
            return Err(RpcError::from_error_value(error));
        }
    }

    match envelope.result {
        Some(result) => Ok(result),
        None => Err(RpcError::unknown()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
