// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Committed operation log.
//!
//! A byte-level framing for the ordered history of committed operations, so
//! that replicas can replay and cross-check it. This module never touches
//! files; the log is a plain buffer owned by the caller.
//!
//! # Format
//! ```text
//! [Header: 16 bytes][Entry][Entry]...
//! Header: magic "ACOL" | version: u32 | reserved: u64
//! Entry:  seq: u64 | payload_len: u32 | checksum: u64 | payload
//! ```
//! All integers are little-endian. The payload is the bincode (standard
//! config) encoding of an `Operation`. The checksum is CRC-64 over
//! `seq || payload_len || payload`. Sequence numbers start at 0 and have no
//! gaps.

use crate::config::{OPLOG_HEADER_SIZE, OPLOG_MAGIC, OPLOG_VERSION};
use crate::error::OpLogError;
use crate::state::operation::Operation;
use byteorder::{ByteOrder, LittleEndian};
use crc64fast::Digest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpLogHeader {
    pub version: u32,
    pub reserved: u64,
}

impl OpLogHeader {
    pub const SIZE: usize = OPLOG_HEADER_SIZE;

    pub fn new() -> Self {
        Self {
            version: OPLOG_VERSION,
            reserved: 0,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..4].copy_from_slice(OPLOG_MAGIC);
        buf[4..8].copy_from_slice(&self.version.to_le_bytes());
        buf[8..16].copy_from_slice(&self.reserved.to_le_bytes());
        buf
    }

    /// Reads and validates a header, returning it with the remaining bytes.
    pub fn read(buf: &[u8]) -> Result<(Self, &[u8]), OpLogError> {
        if buf.len() < Self::SIZE {
            return Err(OpLogError::Truncated { offset: 0 });
        }
        if &buf[0..4] != OPLOG_MAGIC {
            return Err(OpLogError::InvalidMagic);
        }

        let version = LittleEndian::read_u32(&buf[4..8]);
        if version != OPLOG_VERSION {
            return Err(OpLogError::UnsupportedVersion(version));
        }
        let reserved = LittleEndian::read_u64(&buf[8..16]);

        Ok((Self { version, reserved }, &buf[Self::SIZE..]))
    }
}

impl Default for OpLogHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Size of the per-entry frame before the payload.
const ENTRY_HEADER_SIZE: usize = 8 + 4 + 8;

fn entry_checksum(seq: u64, payload: &[u8]) -> u64 {
    let mut digest = Digest::new();
    digest.write(&seq.to_le_bytes());
    digest.write(&(payload.len() as u32).to_le_bytes());
    digest.write(payload);
    digest.sum64()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpLogEntry {
    pub seq: u64,
    pub operation: Operation,
}

/// Append-only log builder.
#[derive(Debug, Clone)]
pub struct OpLogWriter {
    buf: Vec<u8>,
    next_seq: u64,
}

impl OpLogWriter {
    pub fn new() -> Self {
        Self {
            buf: OpLogHeader::new().to_bytes().to_vec(),
            next_seq: 0,
        }
    }

    /// Appends `op` and returns its sequence number.
    pub fn append(&mut self, op: &Operation) -> Result<u64, OpLogError> {
        let payload = bincode::serde::encode_to_vec(op, bincode::config::standard())
            .map_err(|e| OpLogError::Serialization(e.to_string()))?;
        let payload_len =
            u32::try_from(payload.len()).map_err(|_| OpLogError::Serialization("payload exceeds u32 length".into()))?;

        let seq = self.next_seq;
        self.buf.reserve(ENTRY_HEADER_SIZE + payload.len());
        self.buf.extend_from_slice(&seq.to_le_bytes());
        self.buf.extend_from_slice(&payload_len.to_le_bytes());
        self.buf.extend_from_slice(&entry_checksum(seq, &payload).to_le_bytes());
        self.buf.extend_from_slice(&payload);

        self.next_seq += 1;
        Ok(seq)
    }

    /// Number of entries appended so far.
    pub fn len(&self) -> u64 {
        self.next_seq
    }

    pub fn is_empty(&self) -> bool {
        self.next_seq == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for OpLogWriter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn encode_log(ops: &[Operation]) -> Result<Vec<u8>, OpLogError> {
    let mut writer = OpLogWriter::new();
    for op in ops {
        writer.append(op)?;
    }
    Ok(writer.into_bytes())
}

/// Iterates the entries of a log buffer, validating framing, checksums and
/// sequence numbers. Stops after the first error.
pub struct OpLogReader<'a> {
    buf: &'a [u8],
    offset: usize,
    next_seq: u64,
    failed: bool,
}

impl<'a> OpLogReader<'a> {
    /// An empty buffer is a valid, empty log; anything else needs a header.
    pub fn new(buf: &'a [u8]) -> Result<Self, OpLogError> {
        let offset = if buf.is_empty() {
            0
        } else {
            OpLogHeader::read(buf)?;
            OpLogHeader::SIZE
        };

        Ok(Self {
            buf,
            offset,
            next_seq: 0,
            failed: false,
        })
    }

    fn read_entry(&mut self) -> Result<OpLogEntry, OpLogError> {
        let start = self.offset;
        let rest = &self.buf[start..];
        if rest.len() < ENTRY_HEADER_SIZE {
            return Err(OpLogError::Truncated { offset: start });
        }

        let seq = LittleEndian::read_u64(&rest[0..8]);
        let payload_len = LittleEndian::read_u32(&rest[8..12]) as usize;
        let checksum = LittleEndian::read_u64(&rest[12..20]);

        let payload_end = match ENTRY_HEADER_SIZE.checked_add(payload_len) {
            Some(end) if end <= rest.len() => end,
            _ => return Err(OpLogError::Truncated { offset: start }),
        };
        let payload = &rest[ENTRY_HEADER_SIZE..payload_end];

        let found = entry_checksum(seq, payload);
        if found != checksum {
            return Err(OpLogError::ChecksumMismatch {
                seq,
                expected: checksum,
                found,
            });
        }

        if seq != self.next_seq {
            return Err(OpLogError::SequenceGap {
                expected: self.next_seq,
                found: seq,
            });
        }

        let (operation, read) =
            bincode::serde::decode_from_slice::<Operation, _>(payload, bincode::config::standard())
                .map_err(|e| OpLogError::Deserialization(e.to_string()))?;
        if read != payload.len() {
            return Err(OpLogError::Deserialization(format!(
                "{} unread payload bytes in entry {}",
                payload.len() - read,
                seq
            )));
        }

        self.offset = start + payload_end;
        self.next_seq += 1;
        Ok(OpLogEntry { seq, operation })
    }
}

impl<'a> Iterator for OpLogReader<'a> {
    type Item = Result<OpLogEntry, OpLogError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.buf.len() {
            return None;
        }
        let entry = self.read_entry();
        if entry.is_err() {
            self.failed = true;
        }
        Some(entry)
    }
}
