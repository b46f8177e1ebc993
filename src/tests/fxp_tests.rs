// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::SCALE;
use crate::error::NumberError;
use crate::fxp::ops::{dec_add, dec_mul};
use crate::fxp::text::{format_decimal, parse_decimal};
use crate::types::scalar::Decimal;

fn d(s: &str) -> Decimal {
    parse_decimal(s.as_bytes()).unwrap()
}

fn canon(s: &str) -> String {
    format_decimal(d(s))
}

#[test]
fn test_dec_add() {
    assert_eq!(canon("2.5"), "2.5");
    assert_eq!(format_decimal(dec_add(d("2.5"), d("1.5")).unwrap()), "4");
    assert_eq!(format_decimal(dec_add(d("-2.5"), d("1.5")).unwrap()), "-1");
    assert_eq!(format_decimal(dec_add(d("0.1"), d("0.2")).unwrap()), "0.3");
    assert_eq!(format_decimal(dec_add(d("1.25"), d("-1.25")).unwrap()), "0");
}

#[test]
fn test_dec_mul() {
    assert_eq!(format_decimal(dec_mul(d("2.5"), d("3")).unwrap()), "7.5");
    assert_eq!(format_decimal(dec_mul(d("0.5"), d("0.5")).unwrap()), "0.25");
    assert_eq!(format_decimal(dec_mul(d("-2"), d("3")).unwrap()), "-6");
    assert_eq!(format_decimal(dec_mul(d("-2"), d("-3")).unwrap()), "6");
    assert_eq!(dec_mul(d("12345.678"), Decimal::ZERO).unwrap(), Decimal::ZERO);
    assert_eq!(dec_mul(d("12345.678"), Decimal::ONE).unwrap(), d("12345.678"));
}

#[test]
fn test_dec_mul_is_exact() {
    // Products needing a tenth fractional digit fail rather than round.
    assert_eq!(dec_mul(Decimal(1), d("0.5")), Err(NumberError::Precision));
    assert_eq!(dec_mul(Decimal(-3), d("0.5")), Err(NumberError::Precision));
    assert_eq!(dec_mul(d("0.00001"), d("0.00001")), Err(NumberError::Precision));
    // Exactly nine digits is fine.
    assert_eq!(dec_mul(Decimal(2), d("0.5")).unwrap(), Decimal(1));
    assert_eq!(dec_mul(d("0.0001"), d("0.00001")).unwrap(), Decimal(1));
    assert_eq!(dec_mul(Decimal(1), d("3")).unwrap(), Decimal(3));
}

#[test]
fn test_dec_mul_chain_order_independent() {
    let start = Decimal(1);
    let (a, b) = (d("0.5"), d("3"));

    let ab = dec_mul(start, a).and_then(|v| dec_mul(v, b));
    let ba = dec_mul(start, b).and_then(|v| dec_mul(v, a));
    assert_eq!(ab, Err(NumberError::Precision));
    assert_eq!(ba, Err(NumberError::Precision));

    let start = Decimal(2);
    let ab = dec_mul(start, a).and_then(|v| dec_mul(v, b)).unwrap();
    let ba = dec_mul(start, b).and_then(|v| dec_mul(v, a)).unwrap();
    assert_eq!(ab, ba);
    assert_eq!(ab, Decimal(3));
}

#[test]
fn test_dec_mul_wide_operands() {
    // The naive scaled product (1e24 * 1e23) does not fit in 128 bits.
    let product = dec_mul(d("1e15"), d("1e14")).unwrap();
    assert_eq!(format_decimal(product), format!("1{}", "0".repeat(29)));
}

#[test]
fn test_overflow() {
    assert_eq!(dec_add(Decimal(i128::MAX), Decimal(1)), Err(NumberError::Overflow));
    assert_eq!(dec_add(Decimal(-i128::MAX), Decimal(-2)), Err(NumberError::Overflow));
    assert_eq!(dec_mul(d("1e20"), d("1e20")), Err(NumberError::Overflow));
}

#[test]
fn test_add_range_is_symmetric() {
    // i128::MIN would format to text that no longer parses.
    assert_eq!(dec_add(Decimal(-i128::MAX), Decimal(-1)), Err(NumberError::Overflow));

    let lowest = dec_add(Decimal(-i128::MAX + 1), Decimal(-1)).unwrap();
    assert_eq!(lowest, Decimal(-i128::MAX));
    let text = format_decimal(lowest);
    assert_eq!(parse_decimal(text.as_bytes()), Ok(lowest));
}

#[test]
fn test_precision_errors() {
    let tiny = format!("0.{}1", "0".repeat(50));
    assert_eq!(parse_decimal(tiny.as_bytes()), Err(NumberError::Precision));
    assert_eq!(parse_decimal(b"2.0000000005"), Err(NumberError::Precision));
    assert_eq!(d("2.000000000000"), Decimal::from_int(2));
}

#[test]
fn test_canonical_format_is_fixed_point() {
    let inputs = [
        "0", "-0", "+0.0", "007", "7.50", "-7.500", ".25", "1e3", "12.5e-1", "0.000000001", "-123456789.987654321",
        "100", "1000000000000000000000",
    ];
    for s in inputs {
        let once = canon(s);
        let twice = format_decimal(parse_decimal(once.as_bytes()).unwrap());
        assert_eq!(once, twice, "canonical form of {s:?} is not a fixed point");
    }
    assert_eq!(canon("007"), "7");
    assert_eq!(canon("-7.500"), "-7.5");
    assert_eq!(canon("-0"), "0");
    assert_eq!(canon("1e3"), "1000");
    assert_eq!(canon("12.5e-1"), "1.25");
}

#[test]
fn test_display_and_from_str() {
    let v: Decimal = "4.20".parse().unwrap();
    assert_eq!(v.to_string(), "4.2");
    assert_eq!(v.to_canonical_bytes(), b"4.2".to_vec());
    assert_eq!(Decimal::from_int(-3).0, -3 * SCALE);
}
