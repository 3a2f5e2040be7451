//! JSON-RPC 2.0 protocol core — transport-agnostic.
//!
//! This crate contains everything needed to build and interpret JSON-RPC
//! wire payloads without touching the network: the invocation descriptor
//! ([`Rpc`]), the wire envelopes, the envelope codec, batch correlation,
//! and response classification. It has **no HTTP dependency**, making it
//! suitable for use over any transport (the companion `jrpc-client` crate
//! drives it over HTTP).
//!
//! # Example
//!
//! ```
//! use jrpc_proto::{classify, codec, EncodeOptions, Rpc};
//!
//! let rpc = Rpc::new("sum", serde_json::json!([1, 2, 3]));
//! let body = codec::encode_single(&rpc, "", EncodeOptions::default()).unwrap();
//! assert_eq!(body, r#"{"jsonrpc":"2.0","id":1,"method":"sum","params":[1,2,3]}"#);
//!
//! let envelope = codec::decode_single(r#"{"jsonrpc":"2.0","id":1,"result":6}"#).unwrap();
//! assert_eq!(classify(envelope).unwrap(), serde_json::json!(6));
//! ```

pub mod batch;
pub mod classify;
pub mod codec;
pub mod error;
pub mod rpc;
pub mod types;

// Convenience re-exports
pub use batch::{demux, Batch, BatchEntry};
pub use classify::classify;
pub use codec::EncodeOptions;
pub use error::{CodecError, InvalidBatchError, RpcError};
pub use rpc::{Params, Rpc, RpcId};
pub use types::{RequestEnvelope, ResponseEnvelope};
