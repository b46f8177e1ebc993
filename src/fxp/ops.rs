//! Fixed-point operations.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::SCALE;
use crate::error::NumberError;
use crate::types::scalar::Decimal;

/// Exact fixed-point addition. Fails instead of saturating.
///
/// The result range is symmetric: `i128::MIN` has no parseable text form and
/// is reported as overflow.
pub fn dec_add(a: Decimal, b: Decimal) -> Result<Decimal, NumberError> {
    let sum = a.0.checked_add(b.0).ok_or(NumberError::Overflow)?;
    to_signed(sum.unsigned_abs(), sum < 0)
}

/// Exact fixed-point multiplication.
///
/// The full product of two scaled values does not fit in 128 bits, so both
/// magnitudes are split at the scale boundary:
/// `x*y/S = xh*yh*S + xh*yl + xl*yh + xl*yl/S`.
/// Only the last term can carry a remainder. A non-zero remainder means the
/// product needs more than `FRAC_DIGITS` fractional digits and fails with
/// `Precision`. The product is never rounded.
pub fn dec_mul(a: Decimal, b: Decimal) -> Result<Decimal, NumberError> {
    let negative = (a.0 < 0) != (b.0 < 0);
    let scale = SCALE as u128;

    let (x, y) = (a.0.unsigned_abs(), b.0.unsigned_abs());
    let (x_hi, x_lo) = (x / scale, x % scale);
    let (y_hi, y_lo) = (y / scale, y % scale);

    // xl, yl < S, so this is below S^2 and cannot overflow.
    let low = x_lo * y_lo;
    let (low_q, low_r) = (low / scale, low % scale);

    if low_r != 0 {
        return Err(NumberError::Precision);
    }

    let magnitude = x_hi
        .checked_mul(y_hi)
        .and_then(|v| v.checked_mul(scale))
        .and_then(|v| v.checked_add(x_hi.checked_mul(y_lo)?))
        .and_then(|v| v.checked_add(x_lo.checked_mul(y_hi)?))
        .and_then(|v| v.checked_add(low_q))
        .ok_or(NumberError::Overflow)?;

    to_signed(magnitude, negative)
}

pub(crate) fn to_signed(magnitude: u128, negative: bool) -> Result<Decimal, NumberError> {
    if magnitude > i128::MAX as u128 {
        return Err(NumberError::Overflow);
    }
    let v = magnitude as i128;
    Ok(Decimal(if negative { -v } else { v }))
}
