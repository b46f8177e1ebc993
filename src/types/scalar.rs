// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Wrapper for raw i128 representing a base-10 fixed-point number.

use crate::config::SCALE;
use crate::error::NumberError;
use core::fmt;
use core::str::FromStr;

/// A decimal number scaled by `10^FRAC_DIGITS`.
///
/// All arithmetic is integer arithmetic, so every replica on every target
/// computes the same bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Decimal(pub i128);

impl Decimal {
    pub const ZERO: Decimal = Decimal(0);
    pub const ONE: Decimal = Decimal(SCALE);

    pub fn from_int(v: i64) -> Self {
        Decimal(v as i128 * SCALE)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Canonical textual bytes, as stored in a value.
    pub fn to_canonical_bytes(self) -> Vec<u8> {
        crate::fxp::text::format_decimal(self).into_bytes()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::fxp::text::format_decimal(*self))
    }
}

impl FromStr for Decimal {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::fxp::text::parse_decimal(s.as_bytes())
    }
}
