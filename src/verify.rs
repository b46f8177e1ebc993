//! Deterministic Hashing and Verification.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::replay::ReplayState;

/// Computes the BLAKE3 hash of a replayed state.
///
/// Covers the applied operation count and every key/value pair in key order,
/// each length-prefixed so that adjacent fields cannot alias.
pub fn state_hash(state: &ReplayState) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();

    hasher.update(&state.applied().to_le_bytes());

    for (key, value) in state.iter() {
        hasher.update(&(key.as_bytes().len() as u64).to_le_bytes());
        hasher.update(key.as_bytes());
        hasher.update(&(value.raw().len() as u64).to_le_bytes());
        hasher.update(value.raw());
    }

    *hasher.finalize().as_bytes()
}

pub fn log_hash(log_bytes: &[u8]) -> [u8; 32] {
    blake3::hash(log_bytes).into()
}
