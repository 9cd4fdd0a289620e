//! Big Natural Number Operations
//!
//! Provides the arbitrary precision unsigned integer used by the phone number
//! encodings. Only the radix plumbing the codecs need is exposed:
//! - Construction from big-endian bytes
//! - Rendering into a fixed-size big-endian buffer
//! - Rendering to and parsing from a digit string in a given radix
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic.
//! Nothing outside this module touches malachite directly, so the backing
//! library can be swapped without changing the codecs.

use std::fmt;

use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::{FromStringBase, PowerOf2Digits, ToStringBase};
use malachite::Natural;

/// Smallest radix accepted by the string conversions
pub const MIN_RADIX: u32 = 2;

/// Largest radix accepted by the string conversions
pub const MAX_RADIX: u32 = 36;

/// Number of bits in one byte-sized digit
const BYTE_BITS: u64 = 8;

/// Big unsigned number representation using malachite's Natural
///
/// Byte conversions are always big-endian: byte 0 is the most significant.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNatural {
    value: Natural,
}

impl BigNatural {
    /// The value zero
    pub fn zero() -> Self {
        Self {
            value: Natural::ZERO,
        }
    }

    /// Create a big natural from a big-endian byte slice
    ///
    /// Leading zero bytes are insignificant and an empty slice is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_utilities::BigNatural;
    ///
    /// let n = BigNatural::from_be_bytes(&[0x01, 0x00]);
    /// assert_eq!(n.to_string_base(10), "256");
    /// ```
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let value =
            <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(BYTE_BITS, bytes.iter().copied())
                .unwrap_or(Natural::ZERO);
        Self { value }
    }

    /// Minimal big-endian byte representation
    ///
    /// Zero has no significant bytes and yields an empty vector.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        <Natural as PowerOf2Digits<u8>>::to_power_of_2_digits_desc(&self.value, BYTE_BITS)
    }

    /// Number of bytes needed to hold this value
    pub fn significant_bytes(&self) -> usize {
        self.to_be_bytes().len()
    }

    /// Write this value into a big-endian buffer of exactly `size` bytes
    ///
    /// The value is left-padded with zero bytes when it is shorter than
    /// `size`.
    ///
    /// # Returns
    ///
    /// * `Some(bytes)` - Buffer of length `size`
    /// * `None` - The value needs more than `size` bytes
    pub fn fill_be_bytes(&self, size: usize) -> Option<Vec<u8>> {
        let digits = self.to_be_bytes();
        if digits.len() > size {
            return None;
        }
        let mut buf = vec![0u8; size];
        buf[size - digits.len()..].copy_from_slice(&digits);
        Some(buf)
    }

    /// Convert to string representation in given radix
    ///
    /// Digits above 9 use lower-case letters. Zero renders as `"0"`.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`.
    pub fn to_string_base(&self, radix: u32) -> String {
        assert!(
            (MIN_RADIX..=MAX_RADIX).contains(&radix),
            "Radix must be between 2 and 36"
        );
        self.value.to_string_base(radix as u8)
    }

    /// Parse a digit string in the given radix
    ///
    /// Only plain digits of the radix are accepted: no sign, no separators
    /// and no surrounding whitespace. Leading zeros are allowed.
    ///
    /// # Returns
    ///
    /// * `Some(value)` - Parsed value
    /// * `None` - Empty input, unsupported radix or a character outside the radix
    pub fn from_string_base(radix: u32, digits: &str) -> Option<Self> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) || digits.is_empty() {
            return None;
        }
        if !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        Natural::from_string_base(radix as u8, digits).map(|value| Self { value })
    }

    /// Check if this is zero
    pub fn is_zero(&self) -> bool {
        self.value == Natural::ZERO
    }
}

impl From<u64> for BigNatural {
    fn from(value: u64) -> Self {
        Self {
            value: Natural::from(value),
        }
    }
}

impl fmt::Display for BigNatural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_be_bytes() {
        assert_eq!(BigNatural::from_be_bytes(&[0x12, 0x34]), BigNatural::from(0x1234));
        assert_eq!(BigNatural::from_be_bytes(&[0, 0, 0x01]), BigNatural::from(1));
        assert!(BigNatural::from_be_bytes(&[]).is_zero());
        assert!(BigNatural::from_be_bytes(&[0, 0, 0]).is_zero());
    }

    #[test]
    fn test_to_be_bytes_is_minimal() {
        assert_eq!(BigNatural::from(0x010203).to_be_bytes(), vec![1, 2, 3]);
        assert_eq!(BigNatural::from_be_bytes(&[0, 0, 7]).to_be_bytes(), vec![7]);
        assert!(BigNatural::zero().to_be_bytes().is_empty());
    }

    #[test]
    fn test_fill_be_bytes_pads_left() {
        let n = BigNatural::from(0xabcd);
        assert_eq!(n.fill_be_bytes(4), Some(vec![0, 0, 0xab, 0xcd]));
        assert_eq!(n.fill_be_bytes(2), Some(vec![0xab, 0xcd]));
        assert_eq!(BigNatural::zero().fill_be_bytes(3), Some(vec![0, 0, 0]));
        assert_eq!(BigNatural::zero().fill_be_bytes(0), Some(vec![]));
    }

    #[test]
    fn test_fill_be_bytes_overflow() {
        assert_eq!(BigNatural::from(0x1_0000).fill_be_bytes(2), None);
        assert_eq!(BigNatural::from(1).fill_be_bytes(0), None);
    }

    #[test]
    fn test_string_conversion() {
        let big = BigNatural::from(255);
        assert_eq!(big.to_string_base(16), "ff");
        assert_eq!(big.to_string_base(10), "255");
        assert_eq!(big.to_string_base(9), "313");
        assert_eq!(big.to_string_base(2), "11111111");
        assert_eq!(BigNatural::zero().to_string_base(9), "0");
    }

    #[test]
    #[should_panic(expected = "Radix must be between 2 and 36")]
    fn test_to_string_base_rejects_bad_radix() {
        let _ = BigNatural::from(1).to_string_base(37);
    }

    #[test]
    fn test_parse_rejects_bad_radix() {
        assert_eq!(BigNatural::from_string_base(0, "1"), None);
        assert_eq!(BigNatural::from_string_base(37, "1"), None);
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(BigNatural::from_string_base(10, "00255"), Some(BigNatural::from(255)));
        assert_eq!(BigNatural::from_string_base(9, "313"), Some(BigNatural::from(255)));
        assert_eq!(BigNatural::from_string_base(16, "ff"), Some(BigNatural::from(255)));
    }

    #[test]
    fn test_parse_string_rejects_non_digits() {
        assert_eq!(BigNatural::from_string_base(10, ""), None);
        assert_eq!(BigNatural::from_string_base(10, "+1"), None);
        assert_eq!(BigNatural::from_string_base(10, "-1"), None);
        assert_eq!(BigNatural::from_string_base(10, "1 2"), None);
        assert_eq!(BigNatural::from_string_base(10, "1_000"), None);
        assert_eq!(BigNatural::from_string_base(9, "129"), None);
    }

    #[test]
    fn test_large_numbers() {
        let bytes = [0xffu8; 32];
        let big = BigNatural::from_be_bytes(&bytes);
        assert_eq!(big.significant_bytes(), 32);
        assert_eq!(big.fill_be_bytes(32), Some(bytes.to_vec()));
        assert_eq!(big.fill_be_bytes(31), None);

        let decimal = big.to_string_base(10);
        assert_eq!(decimal.len(), 78);
        assert_eq!(BigNatural::from_string_base(10, &decimal), Some(big));
    }

    #[test]
    fn test_display_is_decimal() {
        assert_eq!(BigNatural::from(1234).to_string(), "1234");
    }
}
