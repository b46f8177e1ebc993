//! Set encoding.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::SET_FORMAT_VERSION;
use crate::set::CanonicalSet;

fn write_u32(buf: &mut Vec<u8>, val: u32) {
    buf.extend_from_slice(&val.to_le_bytes());
}

/// Encodes `set` in canonical form.
///
/// Callers bound element length and count by `MAX_SET_ELEMENT_LEN` and
/// `MAX_SET_ELEMENTS` before inserting, so the u32 prefixes never truncate.
pub fn encode_set(set: &CanonicalSet) -> Vec<u8> {
    if set.is_empty() {
        return Vec::new();
    }

    let body: usize = set.iter().map(|e| 4 + e.len()).sum();
    let mut buf = Vec::with_capacity(1 + 4 + body);

    buf.push(SET_FORMAT_VERSION);
    write_u32(&mut buf, set.len() as u32);
    // BTreeSet iteration is byte-lexicographic.
    for element in set.iter() {
        write_u32(&mut buf, element.len() as u32);
        buf.extend_from_slice(element);
    }

    buf
}
