// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Canonical set of opaque byte-string elements.
//!
//! # Format (version 1)
//! ```text
//! empty set:  (zero bytes)
//! otherwise:  [version: u8][count: u32 LE] ([len: u32 LE][bytes])*
//! ```
//! Elements are emitted in strictly ascending byte-lexicographic order, so
//! the encoding depends only on membership. The order is part of the storage
//! format and changing it requires a version bump.

pub mod decode;
pub mod encode;

use crate::error::SetDecodeError;
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalSet {
    elements: BTreeSet<Vec<u8>>,
}

impl CanonicalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SetDecodeError> {
        decode::decode_set(bytes)
    }

    pub fn encode(&self) -> Vec<u8> {
        encode::encode_set(self)
    }

    /// Inserts `element`, returning whether it was new.
    pub fn add(&mut self, element: &[u8]) -> bool {
        if self.elements.contains(element) {
            return false;
        }
        self.elements.insert(element.to_vec())
    }

    /// Removes `element`, returning whether it was present.
    pub fn remove(&mut self, element: &[u8]) -> bool {
        self.elements.remove(element)
    }

    pub fn contains(&self, element: &[u8]) -> bool {
        self.elements.contains(element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.elements.iter().map(Vec::as_slice)
    }
}

impl<T: AsRef<[u8]>> FromIterator<T> for CanonicalSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(|e| e.as_ref().to_vec()).collect(),
        }
    }
}
