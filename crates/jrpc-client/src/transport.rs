//! HTTP transport abstraction.
//!
//! The client talks to the network through the [`HttpTransport`] trait;
//! [`ReqwestTransport`] is the default implementation. Timeouts and
//! connection management belong to the transport, not to the client.

use url::Url;

/// Outgoing HTTP request: always a POST carrying a JSON body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    pub fn new(url: Url, body: String) -> Self {
        Self {
            url,
            headers: Vec::new(),
            body,
        }
    }

    /// Set a header, replacing any existing value. Names compare
    /// case-insensitively.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set a query parameter on the request URL. An existing parameter
    /// with the same name is overwritten in place; all others keep their
    /// position.
    pub fn set_query_param(&mut self, name: &str, value: &str) {
        let mut pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        match pairs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => pairs.push((name.to_string(), value.to_string())),
        }

        let mut serializer = self.url.query_pairs_mut();
        serializer.clear();
        serializer.extend_pairs(pairs);
    }
}

/// Raw HTTP response handed back by a transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Failure raised by the transport collaborator itself (connection
/// refused, DNS failure, invalid header material). Passed through to
/// the caller unchanged.
#[derive(Debug, Clone, thiserror::Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

/// Blocking HTTP transport contract. One call per logical invocation;
/// batches share a single request.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Default transport backed by `reqwest::blocking`.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Use a pre-configured reqwest client, e.g. one with timeouts or a
    /// proxy.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .post(request.url.clone())
            .body(request.body.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> HttpRequest {
        HttpRequest::new(Url::parse(url).unwrap(), String::new())
    }

    #[test]
    fn test_set_header_replaces_case_insensitively() {
        let mut req = request("http://example.com/json-rpc");
        req.set_header("Content-Type", "text/plain");
        req.set_header("content-type", "application/json");

        assert_eq!(req.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn test_set_query_param_on_bare_url() {
        let mut req = request("http://example.com/json-rpc");
        req.set_query_param("rpc", "foo");
        assert_eq!(req.url.query(), Some("rpc=foo"));
    }

    #[test]
    fn test_set_query_param_overwrites_in_place() {
        let mut req = request("http://example.com/json-rpc?a=1&b=2");
        req.set_query_param("a", "changed");
        assert_eq!(req.url.query(), Some("a=changed&b=2"));
    }

    #[test]
    fn test_set_query_param_encodes_brackets() {
        let mut req = request("http://example.com/json-rpc");
        req.set_query_param("rpc[foo]", "method-foo");
        req.set_query_param("rpc[bar]", "method-bar");
        assert_eq!(
            req.url.query(),
            Some("rpc%5Bfoo%5D=method-foo&rpc%5Bbar%5D=method-bar")
        );
    }
}
