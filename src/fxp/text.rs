// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Decimal text codec.
//!
//! Grammar (ASCII): `[+-]? (D+ ('.' D*)? | '.' D+) ([eE] [+-]? D+)?`.
//! Empty input is zero. Output is the shortest text that reads back to the
//! same value: no leading zeros, no trailing fractional zeros, no trailing
//! point, and never `-0`.

use crate::config::{FRAC_DIGITS, MAX_NUMBER_TEXT_LEN, SCALE};
use crate::error::NumberError;
use crate::fxp::ops::to_signed;
use crate::types::scalar::Decimal;

/// Largest power of ten representable in a u128.
const MAX_POW10: u32 = 38;

fn push_digits(acc: u128, digit: u8, zeros_before: u32) -> Result<u128, NumberError> {
    if acc == 0 {
        return Ok((digit - b'0') as u128);
    }
    let shift = 10u128
        .checked_pow(zeros_before + 1)
        .ok_or(NumberError::Overflow)?;
    acc.checked_mul(shift)
        .and_then(|v| v.checked_add((digit - b'0') as u128))
        .ok_or(NumberError::Overflow)
}

/// Parses decimal text exactly.
///
/// At most `FRAC_DIGITS` (9) significant fractional digits are kept, counted
/// after applying the exponent. Trailing zeros beyond that are accepted, but a
/// non-zero digit past the ninth place fails with `NumberError::Precision`
/// instead of being rounded. Magnitudes above `i128::MAX / SCALE` fail with
/// `NumberError::Overflow`.
pub fn parse_decimal(input: &[u8]) -> Result<Decimal, NumberError> {
    if input.is_empty() {
        return Ok(Decimal::ZERO);
    }
    if input.len() > MAX_NUMBER_TEXT_LEN {
        return Err(NumberError::TooLong);
    }

    let mut pos = 0;
    let negative = match input[0] {
        b'-' => {
            pos += 1;
            true
        }
        b'+' => {
            pos += 1;
            false
        }
        _ => false,
    };

    let mut mantissa: u128 = 0;
    let mut frac_digits: i64 = 0;
    let mut digits = 0usize;

    while let Some(&b) = input.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        mantissa = push_digits(mantissa, b, 0)?;
        digits += 1;
        pos += 1;
    }

    if input.get(pos) == Some(&b'.') {
        pos += 1;
        // Fractional zeros are only folded in once a non-zero digit follows,
        // so trailing zeros never cost mantissa range.
        let mut pending_zeros: u32 = 0;
        while let Some(&b) = input.get(pos) {
            if !b.is_ascii_digit() {
                break;
            }
            if b == b'0' {
                pending_zeros += 1;
            } else {
                mantissa = push_digits(mantissa, b, pending_zeros)?;
                frac_digits += pending_zeros as i64 + 1;
                pending_zeros = 0;
            }
            digits += 1;
            pos += 1;
        }
    }

    if digits == 0 {
        return Err(NumberError::Syntax(pos));
    }

    let mut exponent: i64 = 0;
    if matches!(input.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        let exp_negative = match input.get(pos) {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };
        let start = pos;
        while let Some(&b) = input.get(pos) {
            if !b.is_ascii_digit() {
                break;
            }
            exponent = exponent
                .checked_mul(10)
                .and_then(|e| e.checked_add((b - b'0') as i64))
                .ok_or(NumberError::Overflow)?;
            pos += 1;
        }
        if pos == start {
            return Err(NumberError::Syntax(pos));
        }
        if exp_negative {
            exponent = -exponent;
        }
    }

    if pos != input.len() {
        return Err(NumberError::Syntax(pos));
    }

    if mantissa == 0 {
        return Ok(Decimal::ZERO);
    }

    let shift = FRAC_DIGITS as i64 + exponent - frac_digits;
    let magnitude = if shift >= 0 {
        if shift > MAX_POW10 as i64 {
            return Err(NumberError::Overflow);
        }
        mantissa
            .checked_mul(10u128.pow(shift as u32))
            .ok_or(NumberError::Overflow)?
    } else {
        let drop = -shift;
        if drop > MAX_POW10 as i64 {
            return Err(NumberError::Precision);
        }
        let divisor = 10u128.pow(drop as u32);
        if mantissa % divisor != 0 {
            return Err(NumberError::Precision);
        }
        mantissa / divisor
    };

    to_signed(magnitude, negative)
}

pub fn format_decimal(value: Decimal) -> String {
    let scale = SCALE as u128;
    let magnitude = value.0.unsigned_abs();
    let int_part = magnitude / scale;
    let frac_part = magnitude % scale;

    let mut out = String::new();
    if value.0 < 0 {
        out.push('-');
    }
    out.push_str(&int_part.to_string());
    if frac_part != 0 {
        let padded = format!("{:0width$}", frac_part, width = FRAC_DIGITS as usize);
        out.push('.');
        out.push_str(padded.trim_end_matches('0'));
    }
    out
}
