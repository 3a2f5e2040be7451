//! Protocol-level error types.

use serde_json::Value;

/// An error returned by the server while processing a particular RPC.
///
/// This error does not cover transport or envelope decoding failures.
/// Usually it indicates that the parameters of the call were specified
/// incorrectly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("RPC error {code}: {message}")]
pub struct RpcError {
    /// Short description from the server.
    pub message: String,
    /// Numeric error code, `0` when the server supplied none.
    pub code: i64,
    /// Extra data associated with the error.
    pub data: Option<Value>,
}

impl RpcError {
    /// Generic error used when a response carries no usable error object.
    pub fn unknown() -> Self {
        Self {
            message: "Unknown error".into(),
            code: 0,
            data: None,
        }
    }

    /// Build from the decoded `error` member of a response envelope.
    ///
    /// Members of unexpected shape fall back to defaults: a non-string
    /// `message` becomes `"Unknown error"`, a non-integer `code` becomes
    /// `0`.
    pub fn from_error_value(value: &Value) -> Self {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();
        let code = value.get("code").and_then(Value::as_i64).unwrap_or(0);
        let data = value.get("data").cloned();

        Self {
            message,
            code,
            data,
        }
    }
}

/// Malformed JSON on either side of the wire. Carries the underlying
/// parser diagnostic.
#[derive(Debug, thiserror::Error)]
#[error("malformed JSON-RPC payload: {0}")]
pub struct CodecError(#[from] pub serde_json::Error);

/// A batch that cannot be encoded: empty, or containing an entry whose
/// shape cannot be interpreted as a single method invocation. Raised
/// before any network I/O.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid batch: {0}")]
pub struct InvalidBatchError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rpc_error_from_full_object() {
        let err = RpcError::from_error_value(&json!({
            "code": -32602,
            "message": "Invalid params",
            "data": {"hint": "expected array"}
        }));
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "Invalid params");
        assert_eq!(err.data, Some(json!({"hint": "expected array"})));
    }

    #[test]
    fn test_rpc_error_defaults_on_malformed_members() {
        let err = RpcError::from_error_value(&json!({
            "code": "not-a-number",
            "message": 42
        }));
        assert_eq!(err.code, 0);
        assert_eq!(err.message, "Unknown error");
        assert_eq!(err.data, None);
    }

    #[test]
    fn test_rpc_error_display() {
        let err = RpcError {
            message: "bad".into(),
            code: 7,
            data: None,
        };
        assert_eq!(err.to_string(), "RPC error 7: bad");
    }
}
