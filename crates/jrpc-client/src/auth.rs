//! Authentication strategies for outgoing JSON-RPC HTTP requests.
//!
//! A strategy decorates the raw HTTP request with credentials. It runs
//! once per HTTP request, so a batch shares a single decoration pass.
//! User-defined strategies implement [`Authentication`].

use base64::{engine::general_purpose, Engine};

use crate::transport::HttpRequest;

/// Contract for JSON-RPC HTTP request authentication.
pub trait Authentication: Send + Sync {
    /// Add authentication to the given HTTP request.
    fn decorate(&self, request: HttpRequest) -> HttpRequest;
}

/// Basic access authentication.
///
/// See <https://en.wikipedia.org/wiki/Basic_access_authentication>.
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Authentication for BasicAuth {
    fn decorate(&self, mut request: HttpRequest) -> HttpRequest {
        let credentials =
            general_purpose::STANDARD.encode(format!("{}:{}", self.username, self.password));
        request.set_header("Authorization", format!("Basic {}", credentials));
        request
    }
}

/// Bearer token authentication.
///
/// See <https://datatracker.ietf.org/doc/html/rfc6750>.
pub struct Bearer {
    token: String,
}

impl Bearer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Authentication for Bearer {
    fn decorate(&self, mut request: HttpRequest) -> HttpRequest {
        request.set_header("Authorization", format!("Bearer {}", self.token));
        request
    }
}

/// Authentication via an arbitrary custom header.
pub struct Header {
    name: String,
    value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Authentication for Header {
    fn decorate(&self, mut request: HttpRequest) -> HttpRequest {
        request.set_header(&self.name, self.value.clone());
        request
    }
}

/// Authentication via query string parameters.
///
/// Credentials sent this way end up in HTTP logs along with the full
/// URL; prefer a header-based strategy when the server allows it.
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new<N, V>(params: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            params: params
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

impl Authentication for QueryParams {
    fn decorate(&self, mut request: HttpRequest) -> HttpRequest {
        for (name, value) in &self.params {
            request.set_query_param(name, value);
        }
        request
    }
}
