//! Set decoding.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::SET_FORMAT_VERSION;
use crate::error::SetDecodeError;
use crate::set::CanonicalSet;
use byteorder::{LittleEndian, ReadBytesExt};
use std::collections::BTreeSet;
use std::io::Cursor;

fn read_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32, SetDecodeError> {
    let offset = cursor.position() as usize;
    cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| SetDecodeError::Truncated { offset })
}

/// Decodes canonical set bytes. Anything but the exact canonical encoding of
/// some set is rejected, so decode and encode are inverse on valid input.
pub fn decode_set(bytes: &[u8]) -> Result<CanonicalSet, SetDecodeError> {
    if bytes.is_empty() {
        return Ok(CanonicalSet::new());
    }

    let mut cursor = Cursor::new(bytes);

    let version = cursor
        .read_u8()
        .map_err(|_| SetDecodeError::Truncated { offset: 0 })?;
    if version != SET_FORMAT_VERSION {
        return Err(SetDecodeError::UnsupportedVersion(version));
    }

    let count = read_u32(&mut cursor)?;
    if count == 0 {
        return Err(SetDecodeError::EmptyEncoding);
    }

    let mut elements: BTreeSet<Vec<u8>> = BTreeSet::new();
    let mut previous: Option<&[u8]> = None;

    for index in 0..count as usize {
        let len = read_u32(&mut cursor)? as usize;
        let start = cursor.position() as usize;
        let end = start
            .checked_add(len)
            .filter(|end| *end <= bytes.len())
            .ok_or(SetDecodeError::Truncated { offset: start })?;

        let element = &bytes[start..end];
        if let Some(prev) = previous {
            if element <= prev {
                return Err(SetDecodeError::Unordered { index });
            }
        }
        elements.insert(element.to_vec());
        previous = Some(element);
        cursor.set_position(end as u64);
    }

    let consumed = cursor.position() as usize;
    if consumed != bytes.len() {
        return Err(SetDecodeError::TrailingBytes(bytes.len() - consumed));
    }

    Ok(CanonicalSet { elements })
}
