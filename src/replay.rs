//! Deterministic Replay Logic.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

use crate::error::{ExecError, KernelError, Result};
use crate::oplog::OpLogReader;
use crate::state::operation::Operation;
use crate::state::value::Value;
use crate::types::id::Key;
use crate::verify::state_hash;
use std::collections::BTreeMap;

/// In-memory key/value state rebuilt from a committed operation log.
///
/// Stands in for the storage layer during replay. Keys whose value becomes
/// empty are dropped, so an empty value and an absent one are the same state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplayState {
    values: BTreeMap<Key, Value>,
    applied: u64,
}

impl ReplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.values.get(key)
    }

    /// Number of operations applied so far.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Number of keys holding a non-empty value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.values.iter()
    }

    /// Executes `op` against the current value of its key.
    /// On failure the state is unchanged.
    pub fn apply(&mut self, op: &Operation) -> core::result::Result<(), ExecError> {
        let mut value = self.values.get(op.key()).cloned().unwrap_or_default();
        op.exec(&mut value)?;

        if value.is_empty() {
            self.values.remove(op.key());
        } else {
            self.values.insert(op.key().clone(), value);
        }
        self.applied += 1;
        Ok(())
    }
}

/// Replays a log buffer from an empty state. Stops at the first framing or
/// execution error.
pub fn replay_log(log: &[u8]) -> Result<ReplayState> {
    tracing::info!(bytes = log.len(), "replaying operation log");

    let mut state = ReplayState::new();
    for entry in OpLogReader::new(log)? {
        let entry = entry?;
        state.apply(&entry.operation).map_err(|source| {
            tracing::warn!(seq = entry.seq, key = %entry.operation.key(), error = %source, "replay stopped");
            KernelError::Replay {
                seq: entry.seq,
                source,
            }
        })?;
    }

    tracing::info!(applied = state.applied(), keys = state.len(), "replay complete");
    Ok(state)
}

/// Replays a log and returns the final state hash.
pub fn replay_and_hash(log: &[u8]) -> Result<[u8; 32]> {
    Ok(state_hash(&replay_log(log)?))
}
