//! Batch correlation — mapping caller-facing keys to wire ids and
//! demultiplexing the response array back to the caller's key space.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::classify::classify;
use crate::error::{InvalidBatchError, RpcError};
use crate::rpc::{Params, Rpc, RpcId};
use crate::types::{RequestEnvelope, ResponseEnvelope};

/// One member of a batch: a full descriptor, or the shorthand form of a
/// JSON object with exactly one `method → params` member.
#[derive(Debug, Clone)]
pub enum BatchEntry {
    Rpc(Rpc),
    Shorthand(Value),
}

impl From<Rpc> for BatchEntry {
    fn from(rpc: Rpc) -> Self {
        BatchEntry::Rpc(rpc)
    }
}

impl From<Value> for BatchEntry {
    fn from(value: Value) -> Self {
        BatchEntry::Shorthand(value)
    }
}

impl BatchEntry {
    /// Interpret the entry as an invocation descriptor.
    pub fn to_rpc(&self) -> Result<Rpc, InvalidBatchError> {
        match self {
            BatchEntry::Rpc(rpc) => Ok(rpc.clone()),
            BatchEntry::Shorthand(value) => {
                let map = value.as_object().ok_or_else(|| {
                    InvalidBatchError(
                        "batch entry must be an RPC descriptor or a single-key method map".into(),
                    )
                })?;
                let mut members = map.iter();
                match (members.next(), members.next()) {
                    (Some((method, params)), None) => {
                        Ok(Rpc::new(method.clone(), Params::from(params.clone())))
                    }
                    _ => Err(InvalidBatchError(format!(
                        "batch entry must contain exactly one method, got {}",
                        map.len()
                    ))),
                }
            }
        }
    }
}

/// Insertion-ordered batch of keyed invocations.
///
/// The caller's iteration order determines the order of envelopes in the
/// HTTP body; response correlation relies on ids only.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    entries: Vec<(RpcId, BatchEntry)>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a keyed invocation, preserving insertion order.
    pub fn insert(&mut self, key: impl Into<RpcId>, entry: impl Into<BatchEntry>) {
        self.entries.push((key.into(), entry.into()));
    }

    /// Fluent variant of [`Batch::insert`].
    pub fn with(mut self, key: impl Into<RpcId>, entry: impl Into<BatchEntry>) -> Self {
        self.insert(key, entry);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(RpcId, BatchEntry)> {
        self.entries.iter()
    }

    /// Resolve the batch into wire envelopes.
    ///
    /// A descriptor without an id gets its caller key as the wire id.
    /// Caller-supplied duplicate ids are not detected here; distinct keys
    /// keep the batch unambiguous.
    pub fn to_envelopes(&self, prefix: &str) -> Result<Vec<RequestEnvelope>, InvalidBatchError> {
        if self.entries.is_empty() {
            return Err(InvalidBatchError(
                "batch must contain at least one invocation".into(),
            ));
        }

        let mut envelopes = Vec::with_capacity(self.entries.len());
        for (key, entry) in &self.entries {
            let rpc = entry.to_rpc()?;
            let id = rpc.id.unwrap_or_else(|| key.clone());
            envelopes.push(RequestEnvelope::new(
                id,
                format!("{}{}", prefix, rpc.method),
                rpc.params,
            ));
        }
        Ok(envelopes)
    }
}

/// Demultiplex a decoded response array back into the caller's key
/// space.
///
/// Responses may arrive in any order; each one is classified and keyed
/// by its echoed id. The first classification failure aborts the whole
/// batch with that error. Duplicate ids overwrite earlier entries; ids
/// outside the requested key set pass through unfiltered. A success
/// envelope without an id cannot be correlated and surfaces as the
/// generic [`RpcError::unknown`].
pub fn demux(responses: Vec<ResponseEnvelope>) -> Result<BTreeMap<RpcId, Value>, RpcError> {
    let mut results = BTreeMap::new();
    for envelope in responses {
        let id = envelope.id.clone();
        let value = classify(envelope)?;
        let id = id.ok_or_else(RpcError::unknown)?;
        results.insert(id, value);
    }
    Ok(results)
}
