//! Deterministic Proof Structures.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::OPLOG_VERSION;
use crate::error::Result;
use crate::replay::replay_log;
use crate::verify::{log_hash, state_hash};
use serde::{Deserialize, Serialize};

/// A receipt that a specific operation log, replayed from an empty state,
/// results in a specific final state.
///
/// Two replicas holding the same committed history must produce equal
/// proofs; any difference is state divergence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplayProof {
    /// Operation log format version.
    pub format_version: u32,

    /// Number of operations replayed.
    pub operations_applied: u64,

    /// BLAKE3 hash of the operation log bytes.
    pub log_hash: [u8; 32],

    /// BLAKE3 hash of the final state after replay.
    pub final_state_hash: [u8; 32],
}

impl ReplayProof {
    /// Replays `log` and checks that it yields this proof.
    pub fn verify(&self, log: &[u8]) -> Result<bool> {
        Ok(replay_with_proof(log)? == *self)
    }
}

pub fn replay_with_proof(log: &[u8]) -> Result<ReplayProof> {
    let state = replay_log(log)?;
    Ok(ReplayProof {
        format_version: OPLOG_VERSION,
        operations_applied: state.applied(),
        log_hash: log_hash(log),
        final_state_hash: state_hash(&state),
    })
}
