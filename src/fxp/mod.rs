// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Decimal fixed-point codec and arithmetic.

pub mod ops;
pub mod text;

pub use ops::{dec_add, dec_mul};
pub use text::{format_decimal, parse_decimal};
