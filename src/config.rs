// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.
//!
//! Every constant here is part of the replicated format. Replicas that
//! disagree on any of them will diverge, so none of them is runtime tunable.

/// Number of fractional decimal digits carried by a `Decimal`.
pub const FRAC_DIGITS: u32 = 9;

/// Scaling factor for the decimal fixed-point representation (10^FRAC_DIGITS).
pub const SCALE: i128 = 1_000_000_000;

/// Longest numeric text accepted by the parser, in bytes.
pub const MAX_NUMBER_TEXT_LEN: usize = 128;

/// Leading byte of every non-empty encoded set.
pub const SET_FORMAT_VERSION: u8 = 1;

/// Largest element that can be length-prefixed in the set encoding.
pub const MAX_SET_ELEMENT_LEN: usize = u32::MAX as usize;

/// Largest number of elements a set encoding can carry.
pub const MAX_SET_ELEMENTS: usize = u32::MAX as usize;

/// Operation log magic bytes.
pub const OPLOG_MAGIC: &[u8; 4] = b"ACOL";

/// Operation log format version.
pub const OPLOG_VERSION: u32 = 1;

/// Size of the operation log header: magic, version, reserved.
pub const OPLOG_HEADER_SIZE: usize = 4 + 4 + 8;
