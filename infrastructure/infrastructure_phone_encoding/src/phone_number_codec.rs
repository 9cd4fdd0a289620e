//! Phone Number Codec Module
//!
//! Renders a big-endian buffer as a number that looks like a phone number but
//! usually isn't a dialable one, because it never starts with 0 or 1.
//!
//! Format:
//! - Head: the top 2 bits of the buffer as one of `2`, `3`, `4`, `6`
//! - Tail: the remaining bits in base 9, written with the digits
//!   `0 1 2 3 4 6 7 8 9` (`5` is skipped), left-padded with '0's
//!
//! Because `5` never appears in the tail, decoding ignores every `5`. This
//! lets a reader tell apart two otherwise very similar numbers, for example:
//!
//! ```text
//! 2222222222222222222222222222222222222222222222222222222222222222222222222222222
//! 2222222222222222222222222222222222222222222222222222222222222222222222222222223
//! ```
//!
//! The second one can be written with the same value as:
//!
//! ```text
//! 522222222222252222222222222222222222222222222222222222222222222222222222222222223
//! ```
//!
//! Leading characters that can't be a head digit (`0 1 5 7 8 9`) are skipped
//! as well.

use std::sync::OnceLock;

use entities_utilities::BigNatural;

use crate::common::{
    pad_after_head, CodecError, CodecKind, CodecResult, DigitAlphabet, InvalidReason, NumericCodec,
};

const HEAD_BITS: u32 = 2;
const HEAD_SHIFT: u32 = u8::BITS - HEAD_BITS;
const TAIL_RADIX: u32 = 9;

/// Digit that never appears in an encoded tail and is ignored when decoding
pub const FILLER_DIGIT: char = '5';

/// Characters skipped before the head digit when decoding
pub const IGNORED_PREFIX: &[char] = &['0', '1', '5', '7', '8', '9'];

static QUATERNARY_HEAD_ALPHABET: OnceLock<DigitAlphabet> = OnceLock::new();

/// Head digit table: 0 -> '2', 1 -> '3', 2 -> '4', 3 -> '6'
pub fn quaternary_head_alphabet() -> &'static DigitAlphabet {
    QUATERNARY_HEAD_ALPHABET.get_or_init(|| DigitAlphabet::new(b"2346"))
}

/// Phone number codec
///
/// Encodes the first (most significant) 2 bits with the shifted base 4 head
/// alphabet and the remaining data in base 9 with `5` omitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneNumberCodec;

impl NumericCodec for PhoneNumberCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::PhoneNumber
    }

    fn encode_to_string(&self, bytes: &[u8], target_length: usize) -> String {
        let mut data = bytes.to_vec();
        let first = data.first().copied().unwrap_or(0);
        let head = quaternary_head_alphabet().symbol(first >> HEAD_SHIFT);
        if let Some(b0) = data.first_mut() {
            *b0 <<= HEAD_BITS;
        }
        let tail = shift_base9(&BigNatural::from_be_bytes(&data).to_string_base(TAIL_RADIX));
        pad_after_head(head, &tail, target_length)
    }

    /// Leading characters other than 2, 3, 4 or 6 are skipped, and every
    /// subsequent 5 is ignored.
    fn decode_string(&self, s: &str, target_size: usize) -> CodecResult<Vec<u8>> {
        let invalid = |reason| CodecError::invalid(CodecKind::PhoneNumber, reason);

        let mut chars = s.trim_start_matches(IGNORED_PREFIX).chars();
        let first = chars.next().ok_or(invalid(InvalidReason::EmptyInput))?;
        let head = quaternary_head_alphabet()
            .value(first)
            .ok_or(invalid(InvalidReason::UnknownHead(first)))?;
        let tail = BigNatural::from_string_base(TAIL_RADIX, &unshift_base9(chars.as_str()))
            .ok_or(invalid(InvalidReason::MalformedTail))?;

        let mut result = tail
            .fill_be_bytes(target_size)
            .ok_or(invalid(InvalidReason::Overflow { size: target_size }))?;
        match result.first_mut() {
            Some(b0) => *b0 = head << HEAD_SHIFT | *b0 >> HEAD_BITS,
            None if head != 0 => {
                return Err(invalid(InvalidReason::Overflow { size: target_size }));
            }
            None => {}
        }
        Ok(result)
    }
}

/// Map base 9 digits onto the phone number tail alphabet
///
/// Digits `5`-`8` move up by one so the result never contains `5`. Other
/// characters are left alone.
pub fn shift_base9(digits: &str) -> String {
    digits
        .chars()
        .map(|c| match c {
            '5'..='8' => char::from(c as u8 + 1),
            _ => c,
        })
        .collect()
}

/// Inverse of [`shift_base9`], dropping every filler `5`
pub fn unshift_base9(s: &str) -> String {
    s.chars()
        .filter(|&c| c != FILLER_DIGIT)
        .map(|c| match c {
            '6'..='9' => char::from(c as u8 - 1),
            _ => c,
        })
        .collect()
}
