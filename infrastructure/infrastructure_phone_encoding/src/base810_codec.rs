//! Base810 Codec Module
//!
//! Renders a big-endian buffer as a number that looks like a phone number but
//! usually isn't a dialable one, because it never starts with 0 or 1.
//!
//! Format:
//! - Head: the top 3 bits of the buffer as a shifted octal digit (`2`-`9`)
//! - Tail: the remaining bits in base 10, left-padded with '0's
//!
//! A 32-byte key always fits in [`BASE810_KEY_LENGTH`](crate::BASE810_KEY_LENGTH)
//! (79) characters.

use std::sync::OnceLock;

use entities_utilities::BigNatural;

use crate::common::{
    pad_after_head, CodecError, CodecKind, CodecResult, DigitAlphabet, InvalidReason, NumericCodec,
};

/// Bits of the first byte carried by the head digit
const HEAD_BITS: u32 = 3;

/// Shift that moves the head bits out of (and back into) the first byte
const HEAD_SHIFT: u32 = u8::BITS - HEAD_BITS;

const TAIL_RADIX: u32 = 10;

static OCTAL_HEAD_ALPHABET: OnceLock<DigitAlphabet> = OnceLock::new();

/// Head digit table: value 0 maps to '2' through value 7 mapping to '9'
pub fn octal_head_alphabet() -> &'static DigitAlphabet {
    OCTAL_HEAD_ALPHABET.get_or_init(|| DigitAlphabet::new(b"23456789"))
}

/// Base810 codec
///
/// Encodes the first (most significant) 3 bits with the shifted octal head
/// alphabet and the remaining data in base 10.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base810Codec;

impl NumericCodec for Base810Codec {
    fn kind(&self) -> CodecKind {
        CodecKind::Base810
    }

    /// An empty buffer encodes as the value zero.
    fn encode_to_string(&self, bytes: &[u8], target_length: usize) -> String {
        let mut data = bytes.to_vec();
        let first = data.first().copied().unwrap_or(0);
        let head = octal_head_alphabet().symbol(first >> HEAD_SHIFT);
        if let Some(b0) = data.first_mut() {
            // low 3 bits become filler; the head already carries the top 3
            *b0 <<= HEAD_BITS;
        }
        let tail = BigNatural::from_be_bytes(&data).to_string_base(TAIL_RADIX);
        pad_after_head(head, &tail, target_length)
    }

    fn decode_string(&self, s: &str, target_size: usize) -> CodecResult<Vec<u8>> {
        let invalid = |reason| CodecError::invalid(CodecKind::Base810, reason);

        let mut chars = s.chars();
        let first = chars.next().ok_or(invalid(InvalidReason::EmptyInput))?;
        let head = octal_head_alphabet()
            .value(first)
            .ok_or(invalid(InvalidReason::UnknownHead(first)))?;
        let tail = BigNatural::from_string_base(TAIL_RADIX, chars.as_str())
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
