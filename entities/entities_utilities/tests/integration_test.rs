//! Integration tests for entities_utilities crate
//!
//! These tests verify big natural conversions end-to-end, the way the
//! encoding layers use them.

use entities_utilities::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

#[test]
fn test_bytes_roundtrip_through_every_radix() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        let value = BigNatural::from_be_bytes(&bytes);

        for radix in MIN_RADIX..=MAX_RADIX {
            let digits = value.to_string_base(radix);
            let parsed = BigNatural::from_string_base(radix, &digits).unwrap();
            assert_eq!(parsed, value);
            assert_eq!(parsed.fill_be_bytes(32).unwrap(), bytes.to_vec());
        }
    }
}

#[test]
fn test_leading_zero_bytes_are_restored_by_fill() {
    let bytes = [0u8, 0, 0, 9, 8, 7];
    let value = BigNatural::from_be_bytes(&bytes);
    assert_eq!(value.significant_bytes(), 3);
    assert_eq!(value.fill_be_bytes(bytes.len()).unwrap(), bytes.to_vec());
}

#[test]
fn test_base9_rendering_never_uses_digit_nine() {
    let value = BigNatural::from_be_bytes(&[0xff; 16]);
    let digits = value.to_string_base(9);
    assert!(digits.chars().all(|c| ('0'..='8').contains(&c)));
}

#[test]
fn test_parse_rejects_digits_outside_radix() {
    assert!(BigNatural::from_string_base(9, "9").is_none());
    assert!(BigNatural::from_string_base(10, "a").is_none());
    assert!(BigNatural::from_string_base(10, "٣").is_none());
}
