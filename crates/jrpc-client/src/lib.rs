//! JSON-RPC 2.0 client over HTTP.
//!
//! Invokes remote procedures against a JSON-RPC 2.0 endpoint: single
//! named calls, or multiple keyed calls batched into one HTTP exchange.
//! The protocol logic (envelopes, codec, batch correlation) lives in the
//! `jrpc-proto` crate; this crate adds the HTTP layer on top of it —
//! request orchestration, authentication strategies, and a pluggable
//! blocking transport with a reqwest-backed default.
//!
//! # Single call
//!
//! ```no_run
//! use jrpc_client::Client;
//!
//! let client = Client::new("http://example.com/json-rpc").unwrap();
//! let sum = client.invoke("sum", serde_json::json!([1, 2, 3])).unwrap();
//! ```
//!
//! # Batch call
//!
//! ```no_run
//! use jrpc_client::{Batch, Client, Rpc};
//!
//! let client = Client::new("http://example.com/json-rpc").unwrap();
//! let results = client
//!     .invoke_batch(
//!         Batch::new()
//!             .with("foo", Rpc::new("method-foo", serde_json::json!({"name": "foo"})))
//!             .with("bar", Rpc::new("method-bar", serde_json::json!({"name": "bar"}))),
//!     )
//!     .unwrap();
//! ```
//!
//! # Authentication
//!
//! ```no_run
//! use jrpc_client::auth::Bearer;
//! use jrpc_client::Client;
//!
//! let client = Client::builder("https://example.com/json-rpc")
//!     .authentication(Bearer::new("my-token"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Failures — invalid batches, malformed JSON, non-2xx statuses,
//! transport errors, and server-reported RPC errors — all surface
//! through the single [`Error`] taxonomy, synchronously, with no
//! retries.

pub mod auth;
pub mod client;
pub mod error;
pub mod transport;

// Convenience re-exports
pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};

// Protocol core re-exports, so most callers need only this crate
pub use jrpc_proto::{Batch, BatchEntry, Params, Rpc, RpcError, RpcId};
