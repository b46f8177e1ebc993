// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Stored value for one key.

use crate::error::{NumberError, SetDecodeError};
use crate::fxp::text::parse_decimal;
use crate::set::CanonicalSet;
use crate::types::scalar::Decimal;

/// Opaque stored bytes.
///
/// There is no type tag: the same bytes are read as a number or as a set
/// depending on the operation that touches them. Interpretations are decoded
/// on demand and never cached, so after execution `raw` is authoritative.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Value {
    raw: Vec<u8>,
}

impl Value {
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self { raw: raw.into() }
    }

    /// The uninitialized value: zero as a number, the empty set as a set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn as_number(&self) -> Result<Decimal, NumberError> {
        parse_decimal(&self.raw)
    }

    pub fn as_set(&self) -> Result<CanonicalSet, SetDecodeError> {
        CanonicalSet::decode(&self.raw)
    }

    /// Replaces the whole content. The only way execution mutates a value.
    pub(crate) fn replace(&mut self, raw: Vec<u8>) {
        self.raw = raw;
    }
}

impl From<Option<Vec<u8>>> for Value {
    fn from(raw: Option<Vec<u8>>) -> Self {
        Self::new(raw.unwrap_or_default())
    }
}

impl From<Vec<u8>> for Value {
    fn from(raw: Vec<u8>) -> Self {
        Self::new(raw)
    }
}

impl From<&[u8]> for Value {
    fn from(raw: &[u8]) -> Self {
        Self::new(raw)
    }
}
