//! JSON-RPC 2.0 wire envelope types.
//!
//! These types are defined standalone (not tied to any HTTP framework)
//! so they can be serialized/deserialized in any transport context.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::rpc::{Params, RpcId};

/// Protocol version carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Sentinel request id used when a single call carries none.
pub const DEFAULT_ID: i64 = 1;

/// JSON-RPC 2.0 request object as sent on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Always "2.0".
    pub jsonrpc: String,
    /// Resolved request id; never absent on the wire.
    pub id: RpcId,
    /// Method name with the configured prefix already applied.
    pub method: String,
    /// Method parameters (positional or named).
    pub params: Params,
}

impl RequestEnvelope {
    pub fn new(id: RpcId, method: String, params: Params) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id,
            method,
            params,
        }
    }
}

/// JSON-RPC 2.0 response object as decoded from the wire.
///
/// `result` and `error` preserve key presence: an explicit JSON `null`
/// decodes as `Some(Value::Null)`, an absent key as `None`. Response
/// classification depends on that distinction.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    /// Expected to be "2.0"; not validated.
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// Echo of the request id; `None` for malformed-request responses.
    #[serde(default)]
    pub id: Option<RpcId>,
    /// Result value on success, any JSON value including `null`.
    #[serde(default, deserialize_with = "present")]
    pub result: Option<Value>,
    /// Error object on failure, kept opaque for lenient classification.
    #[serde(default, deserialize_with = "present")]
    pub error: Option<Value>,
}

/// Deserialize any value, `null` included, as `Some`. Absent keys fall
/// back to the field default of `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
