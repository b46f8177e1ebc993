// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Operation definition.

use crate::error::{ConflictError, ExecError};
use crate::state::value::Value;
use crate::types::enums::OpKind;
use crate::types::id::Key;
use serde::{Deserialize, Serialize};

/// A request to mutate one key.
///
/// Immutable once built; equality is structural. `operand` is a replacement
/// value for `SET`, decimal text for `ADD`/`MUL`, and an element for
/// `SADD`/`SREM`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    key: Key,
    kind: OpKind,
    operand: Vec<u8>,
}

impl Operation {
    pub fn new(key: impl Into<Key>, kind: OpKind, operand: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            kind,
            operand: operand.into(),
        }
    }

    /// Builds an operation from a wire tag, rejecting tags outside the algebra.
    pub fn from_raw(key: impl Into<Key>, tag: u8, operand: impl Into<Vec<u8>>) -> Result<Self, ExecError> {
        let kind = OpKind::try_from(tag)?;
        Ok(Self::new(key, kind, operand))
    }

    pub fn set(key: impl Into<Key>, value: impl Into<Vec<u8>>) -> Self {
        Self::new(key, OpKind::Set, value)
    }

    pub fn add(key: impl Into<Key>, amount: impl Into<Vec<u8>>) -> Self {
        Self::new(key, OpKind::Add, amount)
    }

    pub fn mul(key: impl Into<Key>, factor: impl Into<Vec<u8>>) -> Self {
        Self::new(key, OpKind::Mul, factor)
    }

    pub fn sadd(key: impl Into<Key>, element: impl Into<Vec<u8>>) -> Self {
        Self::new(key, OpKind::Sadd, element)
    }

    pub fn srem(key: impl Into<Key>, element: impl Into<Vec<u8>>) -> Self {
        Self::new(key, OpKind::Srem, element)
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn kind(&self) -> OpKind {
        self.kind
    }

    pub fn operand(&self) -> &[u8] {
        &self.operand
    }

    /// Checks whether `self` and `other` may be committed together.
    /// Symmetric; never parses operands.
    pub fn check_conflict(&self, other: &Operation) -> Result<(), ConflictError> {
        crate::state::conflict::check_conflict(self, other)
    }

    /// Applies this operation to `value`. On error `value` is left unchanged.
    pub fn exec(&self, value: &mut Value) -> Result<(), ExecError> {
        crate::state::exec::apply(self, value)
    }
}
