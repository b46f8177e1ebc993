// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use crate::config::{FRAC_DIGITS, MAX_NUMBER_TEXT_LEN};
use crate::types::enums::OpKind;
use crate::types::id::Key;
use thiserror::Error;

/// Failure to read bytes as a decimal number, or to compute with one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("invalid decimal syntax at byte {0}")]
    Syntax(usize),

    #[error("decimal text longer than {} bytes", MAX_NUMBER_TEXT_LEN)]
    TooLong,

    #[error("decimal needs more than {} fractional digits", FRAC_DIGITS)]
    Precision,

    #[error("decimal value out of range")]
    Overflow,
}

/// Malformed canonical set bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetDecodeError {
    #[error("unsupported set format version {0}")]
    UnsupportedVersion(u8),

    #[error("set encoding truncated at offset {offset}")]
    Truncated { offset: usize },

    #[error("{0} trailing bytes after the last set element")]
    TrailingBytes(usize),

    #[error("set element {index} is out of canonical order")]
    Unordered { index: usize },

    #[error("explicit zero-element set encoding is not canonical")]
    EmptyEncoding,
}

/// Two operations on the same key that do not commute.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("conflicting operations on key {key}: {left} {left_operand:?} vs {right} {right_operand:?}")]
pub struct ConflictError {
    pub key: Key,
    pub left: OpKind,
    pub left_operand: Vec<u8>,
    pub right: OpKind,
    pub right_operand: Vec<u8>,
}

/// Failure to execute a committed operation against a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    #[error("current value is not a valid number: {0}")]
    InvalidCurrentValue(NumberError),

    #[error("operand is not a valid number: {0}")]
    InvalidOperand(NumberError),

    #[error("current value is not a valid set: {0}")]
    InvalidSet(#[from] SetDecodeError),

    #[error("set element of {0} bytes cannot be encoded")]
    ElementTooLarge(usize),

    #[error("set is full")]
    SetCapacity,

    #[error("numeric result out of range")]
    Overflow,

    #[error("product needs more than {} fractional digits", FRAC_DIGITS)]
    InexactProduct,

    #[error("unknown operation kind {0}")]
    UnknownOperationKind(u8),
}

/// Malformed or inconsistent operation log bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpLogError {
    #[error("invalid magic bytes in operation log header")]
    InvalidMagic,

    #[error("unsupported operation log version {0}")]
    UnsupportedVersion(u32),

    #[error("operation log truncated at offset {offset}")]
    Truncated { offset: usize },

    #[error("checksum mismatch for entry {seq}: expected {expected}, found {found}")]
    ChecksumMismatch { seq: u64, expected: u64, found: u64 },

    #[error("sequence gap: expected entry {expected}, found {found}")]
    SequenceGap { expected: u64, found: u64 },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error(transparent)]
    Log(#[from] OpLogError),

    #[error("operation {seq} failed during replay: {source}")]
    Replay { seq: u64, source: ExecError },
}

pub type KernelResult<T> = core::result::Result<T, KernelError>;
pub type Result<T> = KernelResult<T>;
