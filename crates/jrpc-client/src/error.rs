//! Unified client-side error taxonomy.
//!
//! Every invocation entry point surfaces exactly one of these variants;
//! nothing is retried or suppressed.

use lazy_static::lazy_static;
use regex::Regex;

use jrpc_proto::{CodecError, InvalidBatchError, RpcError};

use crate::transport::TransportError;

/// Maximum length of the response body excerpt carried by
/// [`Error::Http`].
const EXCERPT_LIMIT: usize = 255;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Every failure an invocation entry point can surface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    /// The batch could not be encoded; raised before any network I/O.
    #[error(transparent)]
    InvalidBatch(#[from] InvalidBatchError),

    /// Malformed JSON in either direction.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// HTTP status outside the 2xx range. The body is never decoded as
    /// JSON-RPC; a sanitized excerpt of it is carried in the message.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Failure raised by the transport collaborator, passed through.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Well-formed JSON-RPC error object returned by the server.
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

impl Error {
    /// Build the HTTP-status variant: `"<status> <reason>: <excerpt>"`,
    /// where the excerpt is the tag-stripped, truncated response body.
    pub(crate) fn http(status: u16, body: &str) -> Self {
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status");

        let excerpt = body_excerpt(body);
        let message = if excerpt.is_empty() {
            format!("{} {}", status, reason)
        } else {
            format!("{} {}: {}", status, reason, excerpt)
        };

        Error::Http { status, message }
    }
}

fn body_excerpt(body: &str) -> String {
    let stripped = TAG_RE.replace_all(body, "");
    stripped.trim().chars().take(EXCERPT_LIMIT).collect()
}
