//! Invocation descriptor — the caller-facing representation of one
//! remote call before wire encoding.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request identifier — a JSON number or string.
///
/// Orders numbers before strings so it can key ordered result maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Num(i64),
    Str(String),
}

impl Ord for RpcId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (RpcId::Num(a), RpcId::Num(b)) => a.cmp(b),
            (RpcId::Str(a), RpcId::Str(b)) => a.cmp(b),
            (RpcId::Num(_), RpcId::Str(_)) => Ordering::Less,
            (RpcId::Str(_), RpcId::Num(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for RpcId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcId::Num(n) => write!(f, "{}", n),
            RpcId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RpcId {
    fn from(id: i64) -> Self {
        RpcId::Num(id)
    }
}

impl From<&str> for RpcId {
    fn from(id: &str) -> Self {
        RpcId::Str(id.to_string())
    }
}

impl From<String> for RpcId {
    fn from(id: String) -> Self {
        RpcId::Str(id)
    }
}

/// Method parameters — positional (serialized as a JSON array) or named
/// (serialized as a JSON object).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Params {
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl Default for Params {
    fn default() -> Self {
        Params::Positional(Vec::new())
    }
}

impl From<Vec<Value>> for Params {
    fn from(values: Vec<Value>) -> Self {
        Params::Positional(values)
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Params::Named(map)
    }
}

impl From<Value> for Params {
    /// Arrays become positional parameters, objects become named ones.
    /// Any other value is wrapped as a single positional parameter.
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => Params::Positional(values),
            Value::Object(map) => Params::Named(map),
            other => Params::Positional(vec![other]),
        }
    }
}

/// Rpc is a descriptor representing one particular JSON-RPC invocation.
///
/// It stays mutable until it is handed to an invocation entry point and
/// is consumed exactly once by the codec.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rpc {
    /// Remote method (procedure) name, before any prefixing.
    pub method: String,
    /// Remote method parameters.
    pub params: Params,
    /// Request id; assigned by the correlator when absent in a batch.
    pub id: Option<RpcId>,
}

impl Rpc {
    /// Create a descriptor with no explicit id.
    pub fn new(method: impl Into<String>, params: impl Into<Params>) -> Self {
        Self {
            method: method.into(),
            params: params.into(),
            id: None,
        }
    }

    /// Attach an explicit request id.
    pub fn with_id(mut self, id: impl Into<RpcId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Replace the method name. Chainable.
    pub fn set_method(&mut self, method: impl Into<String>) -> &mut Self {
        self.method = method.into();
        self
    }

    /// Replace the parameters. Chainable.
    pub fn set_params(&mut self, params: impl Into<Params>) -> &mut Self {
        self.params = params.into();
        self
    }

    /// Set or clear the request id. Chainable.
    pub fn set_id(&mut self, id: Option<RpcId>) -> &mut Self {
        self.id = id;
        self
    }
}
