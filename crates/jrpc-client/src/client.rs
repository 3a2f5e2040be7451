//! JSON-RPC client — request orchestration over an HTTP transport.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde_json::Value;
use url::Url;

use jrpc_proto::batch::Batch;
use jrpc_proto::codec::{self, EncodeOptions};
use jrpc_proto::rpc::{Params, Rpc, RpcId};
use jrpc_proto::{classify, demux};

use crate::auth::Authentication;
use crate::error::Error;
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};

/// JSON-RPC 2.0 client over HTTP.
///
/// Configuration is fixed at build time (see [`ClientBuilder`]) and
/// read-only during sends; issuing calls from multiple threads against
/// one instance is safe as long as the configured transport is.
///
/// # Example
///
/// ```no_run
/// use jrpc_client::Client;
///
/// let client = Client::new("http://example.com/json-rpc").unwrap();
/// let result = client.invoke("sum", serde_json::json!([1, 2, 3])).unwrap();
/// ```
pub struct Client {
    endpoint: Url,
    method_prefix: String,
    user_agent: Option<String>,
    method_query_param: Option<String>,
    encode_options: EncodeOptions,
    authentication: Option<Box<dyn Authentication>>,
    transport: Box<dyn HttpTransport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint)
            .field("method_prefix", &self.method_prefix)
            .field("user_agent", &self.user_agent)
            .field("method_query_param", &self.method_query_param)
            .field("encode_options", &self.encode_options)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Client with default configuration: reqwest transport, no
    /// authentication, no method prefix.
    pub fn new(endpoint: &str) -> Result<Self, Error> {
        Self::builder(endpoint).build()
    }

    /// Start building a client for the given endpoint URL.
    pub fn builder(endpoint: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            endpoint: endpoint.into(),
            method_prefix: String::new(),
            user_agent: None,
            method_query_param: None,
            pretty_json: false,
            authentication: None,
            transport: None,
        }
    }

    /// Invoke a single remote method by name, without constructing a
    /// descriptor. The request carries no explicit id.
    pub fn invoke(
        &self,
        method: impl Into<String>,
        params: impl Into<Params>,
    ) -> Result<Value, Error> {
        self.invoke_rpc(Rpc::new(method, params))
    }

    /// Invoke the single remote procedure described by `rpc`, returning
    /// the unwrapped result value.
    pub fn invoke_rpc(&self, rpc: Rpc) -> Result<Value, Error> {
        let body = codec::encode_single(&rpc, &self.method_prefix, self.encode_options)?;

        let mut request = HttpRequest::new(self.endpoint.clone(), body.clone());
        if let Some(name) = &self.method_query_param {
            request.set_query_param(name, &rpc.method);
        }

        let (raw, elapsed) = self.exchange(request)?;
        let envelope = codec::decode_single(&raw).map_err(|err| self.decode_failure(&body, err))?;
        self.trace_exchange(&body, &raw, elapsed);

        classify(envelope).map_err(Error::from)
    }

    /// Invoke a batch of keyed procedures as one HTTP exchange.
    ///
    /// Returns a map from the caller's keys to result values. The first
    /// erroring member encountered during demultiplexing fails the whole
    /// call; there are no partial results.
    pub fn invoke_batch(&self, batch: Batch) -> Result<BTreeMap<RpcId, Value>, Error> {
        let envelopes = batch.to_envelopes(&self.method_prefix)?;
        let body = codec::encode_envelopes(&envelopes, self.encode_options)?;

        let mut request = HttpRequest::new(self.endpoint.clone(), body.clone());
        if let Some(name) = &self.method_query_param {
            for (key, entry) in batch.iter() {
                let rpc = entry.to_rpc()?;
                request.set_query_param(&format!("{}[{}]", name, key), &rpc.method);
            }
        }

        let (raw, elapsed) = self.exchange(request)?;
        let responses = codec::decode_batch(&raw).map_err(|err| self.decode_failure(&body, err))?;
        self.trace_exchange(&body, &raw, elapsed);

        demux(responses).map_err(Error::from)
    }

    /// Decorate and send one HTTP request, returning the raw response
    /// body and the wall-clock time spent waiting for it.
    ///
    /// The user agent is applied before authentication so a strategy may
    /// override it. Non-2xx statuses short-circuit before any JSON
    /// decoding.
    fn exchange(&self, mut request: HttpRequest) -> Result<(String, Duration), Error> {
        request.set_header("Content-Type", "application/json");
        if let Some(agent) = &self.user_agent {
            request.set_header("User-Agent", agent.clone());
        }
        if let Some(authentication) = &self.authentication {
            request = authentication.decorate(request);
        }

        let started = Instant::now();
        let outcome = self
            .transport
            .send(&request)
            .map_err(Error::from)
            .and_then(|response| {
                if (200..300).contains(&response.status) {
                    Ok(response.body)
                } else {
                    Err(Error::http(response.status, &response.body))
                }
            });

        match outcome {
            Ok(raw) => Ok((raw, started.elapsed())),
            Err(err) => {
                tracing::error!(
                    endpoint = %self.endpoint,
                    request = %request.body,
                    error = %err,
                    "JSON-RPC HTTP exchange failed"
                );
                Err(err)
            }
        }
    }

    fn decode_failure(&self, request_body: &str, err: jrpc_proto::CodecError) -> Error {
        tracing::error!(
            endpoint = %self.endpoint,
            request = %request_body,
            error = %err,
            "failed to decode JSON-RPC response"
        );
        Error::from(err)
    }

    fn trace_exchange(&self, request_body: &str, response_body: &str, elapsed: Duration) {
        tracing::debug!(
            endpoint = %self.endpoint,
            request = %request_body,
            response = %response_body,
            elapsed_ms = elapsed.as_millis() as u64,
            "JSON-RPC exchange completed"
        );
    }
}

/// Builder for [`Client`].
///
/// The endpoint URL is required; everything else defaults to off. Call
/// [`ClientBuilder::build`] to parse the endpoint and freeze the
/// configuration.
pub struct ClientBuilder {
    endpoint: String,
    method_prefix: String,
    user_agent: Option<String>,
    method_query_param: Option<String>,
    pretty_json: bool,
    authentication: Option<Box<dyn Authentication>>,
    transport: Option<Box<dyn HttpTransport>>,
}

impl ClientBuilder {
    /// Prefix prepended to every method name on the wire, e.g. `"math."`.
    pub fn method_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.method_prefix = prefix.into();
        self
    }

    /// `User-Agent` header for outgoing requests. An authentication
    /// strategy that sets the same header wins.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Name of a debug query parameter mirroring the invoked method
    /// name(s), e.g. `?rpc=foo` for single calls and `?rpc[key]=foo`
    /// per batch member. Off by default.
    pub fn method_query_param(mut self, name: impl Into<String>) -> Self {
        self.method_query_param = Some(name.into());
        self
    }

    /// Pretty-print outgoing JSON payloads.
    pub fn pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Authentication strategy applied to every outgoing request.
    pub fn authentication(mut self, authentication: impl Authentication + 'static) -> Self {
        self.authentication = Some(Box::new(authentication));
        self
    }

    /// Replace the default reqwest transport.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Parse the endpoint and build the client.
    pub fn build(self) -> Result<Client, Error> {
        Ok(Client {
            endpoint: Url::parse(&self.endpoint)?,
            method_prefix: self.method_prefix,
            user_agent: self.user_agent,
            method_query_param: self.method_query_param,
            encode_options: EncodeOptions {
                pretty: self.pretty_json,
            },
            authentication: self.authentication,
            transport: self
                .transport
                .unwrap_or_else(|| Box::new(ReqwestTransport::new())),
        })
    }
}
