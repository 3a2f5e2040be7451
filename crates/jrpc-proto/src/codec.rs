//! Envelope codec — turning descriptors into wire payloads and raw
//! response payloads back into envelopes.

use serde::Serialize;

use crate::error::CodecError;
use crate::rpc::{Rpc, RpcId};
use crate::types::{RequestEnvelope, ResponseEnvelope, DEFAULT_ID};

/// JSON output options, passed through from client configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Pretty-print the outgoing payload.
    pub pretty: bool,
}

/// Encode a single invocation. The method prefix is prepended and an
/// absent id defaults to the sentinel [`DEFAULT_ID`].
pub fn encode_single(rpc: &Rpc, prefix: &str, options: EncodeOptions) -> Result<String, CodecError> {
    let id = rpc.id.clone().unwrap_or(RpcId::Num(DEFAULT_ID));
    let envelope = RequestEnvelope::new(id, format!("{}{}", prefix, rpc.method), rpc.params.clone());
    to_json(&envelope, options)
}

/// Encode an already-correlated batch (see [`crate::batch::Batch::to_envelopes`]).
pub fn encode_envelopes(
    envelopes: &[RequestEnvelope],
    options: EncodeOptions,
) -> Result<String, CodecError> {
    to_json(&envelopes, options)
}

/// Decode a single response envelope from raw JSON.
pub fn decode_single(raw: &str) -> Result<ResponseEnvelope, CodecError> {
    serde_json::from_str(raw).map_err(CodecError)
}

/// Decode a batch response. The top-level JSON value must be an array.
pub fn decode_batch(raw: &str) -> Result<Vec<ResponseEnvelope>, CodecError> {
    serde_json::from_str(raw).map_err(CodecError)
}

fn to_json<T: Serialize>(value: &T, options: EncodeOptions) -> Result<String, CodecError> {
    let encoded = if options.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(CodecError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_single_defaults_id_to_sentinel() {
        let rpc = Rpc::new("foo", json!({"name": "bar"}));
        let body = encode_single(&rpc, "", EncodeOptions::default()).unwrap();
        assert_eq!(
            body,
            r#"{"jsonrpc":"2.0","id":1,"method":"foo","params":{"name":"bar"}}"#
        );
    }

    #[test]
    fn test_encode_single_keeps_explicit_id_and_applies_prefix() {
        let rpc = Rpc::new("foo", json!([])).with_id("my-id");
        let body = encode_single(&rpc, "pre.", EncodeOptions::default()).unwrap();
        assert_eq!(
            body,
            r#"{"jsonrpc":"2.0","id":"my-id","method":"pre.foo","params":[]}"#
        );
    }

    #[test]
    fn test_encode_pretty() {
        let rpc = Rpc::new("foo", json!([]));
        let body = encode_single(&rpc, "", EncodeOptions { pretty: true }).unwrap();
        assert!(body.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["method"], "foo");
    }

    #[test]
    fn test_decode_single_malformed_json() {
        let err = decode_single("{not json").unwrap_err();
        assert!(err.to_string().contains("malformed JSON-RPC payload"));
    }

    #[test]
    fn test_decode_batch_requires_array() {
        assert!(decode_batch(r#"{"jsonrpc":"2.0","id":1,"result":1}"#).is_err());
        let decoded = decode_batch(r#"[{"jsonrpc":"2.0","id":1,"result":1}]"#).unwrap();
        assert_eq!(decoded.len(), 1);
    }
}
