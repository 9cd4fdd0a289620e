//! Common Encoding/Decoding Utilities
//!
//! Provides the pieces shared by the Base810 and phone number codecs:
//! - The [`NumericCodec`] trait both codecs implement
//! - [`CodecKind`] for runtime selection of a codec
//! - [`DigitAlphabet`] head digit tables
//! - Error types
//! - Zero padding between the head digit and the tail
//!
//! ## See Also
//!
//! - [`base810_codec`](super::base810_codec/index.html): Fixed octal head, decimal tail
//! - [`phone_number_codec`](super::phone_number_codec/index.html): Base 4 head, base 9 tail with fillers

use std::fmt;

use thiserror::Error;

use crate::base810_codec::Base810Codec;
use crate::phone_number_codec::PhoneNumberCodec;

/// Size in bytes of the keys these encodings are designed for
pub const KEY_SIZE: usize = 32;

/// Base810 width that holds any 32-byte key exactly
pub const BASE810_KEY_LENGTH: usize = 79;

/// Phone number width that holds any 32-byte key exactly
pub const PHONE_NUMBER_KEY_LENGTH: usize = 82;

/// Why a string failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// Nothing left to decode
    #[error("empty input")]
    EmptyInput,
    /// First significant character is not in the head alphabet
    #[error("unrecognized head digit {0:?}")]
    UnknownHead(char),
    /// Tail is empty or contains characters outside the radix
    #[error("malformed digit tail")]
    MalformedTail,
    /// Decoded value does not fit in the requested size
    #[error("value does not fit in {size} bytes")]
    Overflow { size: usize },
}

/// Codec errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The string is not a valid encoding for `codec`
    #[error("Invalid {codec} string: {reason}")]
    InvalidEncoding {
        codec: CodecKind,
        reason: InvalidReason,
    },
}

impl CodecError {
    pub(crate) fn invalid(codec: CodecKind, reason: InvalidReason) -> Self {
        CodecError::InvalidEncoding { codec, reason }
    }

    /// Codec that rejected the input
    pub fn codec(&self) -> CodecKind {
        match self {
            CodecError::InvalidEncoding { codec, .. } => *codec,
        }
    }

    /// Reason the input was rejected
    pub fn reason(&self) -> InvalidReason {
        match self {
            CodecError::InvalidEncoding { reason, .. } => *reason,
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Encoding that renders a binary buffer as a phone-number-like digit string
///
/// Implementations treat the buffer as a big-endian number. The most
/// significant bits select a head digit that is never `0` or `1`; the rest
/// is rendered as zero-padded digits.
pub trait NumericCodec {
    /// Which encoding this is
    fn kind(&self) -> CodecKind;

    /// Encode `bytes` into a string of at least `target_length` characters
    ///
    /// Zeros are inserted after the head digit to reach `target_length`.
    /// The tail is never truncated, so the result is longer than
    /// `target_length` when the value needs more digits.
    fn encode_to_string(&self, bytes: &[u8], target_length: usize) -> String;

    /// Decode `s` into exactly `target_size` bytes
    ///
    /// If the string doesn't contain enough data to fill `target_size`, the
    /// result has leading zeros.
    fn decode_string(&self, s: &str, target_size: usize) -> CodecResult<Vec<u8>>;
}

/// Available encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    /// Shifted octal head digit followed by a decimal tail
    Base810,
    /// Shifted base 4 head digit followed by a base 9 tail without `5`s
    PhoneNumber,
}

impl CodecKind {
    /// Width that holds any [`KEY_SIZE`] key without extra growth
    pub fn key_length(&self) -> usize {
        match self {
            CodecKind::Base810 => BASE810_KEY_LENGTH,
            CodecKind::PhoneNumber => PHONE_NUMBER_KEY_LENGTH,
        }
    }

    /// Encode using the selected codec.
    pub fn encode_to_string(&self, bytes: &[u8], target_length: usize) -> String {
        match self {
            CodecKind::Base810 => Base810Codec.encode_to_string(bytes, target_length),
            CodecKind::PhoneNumber => PhoneNumberCodec.encode_to_string(bytes, target_length),
        }
    }

    /// Decode using the selected codec.
    pub fn decode_string(&self, s: &str, target_size: usize) -> CodecResult<Vec<u8>> {
        match self {
            CodecKind::Base810 => Base810Codec.decode_string(s, target_size),
            CodecKind::PhoneNumber => PhoneNumberCodec.decode_string(s, target_size),
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecKind::Base810 => write!(f, "Base810"),
            CodecKind::PhoneNumber => write!(f, "phone number"),
        }
    }
}

/// Bijection between a small integer domain and printable head digits
///
/// Built once per codec and never mutated afterwards.
#[derive(Debug)]
pub struct DigitAlphabet {
    symbols: &'static [u8],
    reverse: [Option<u8>; 128],
}

impl DigitAlphabet {
    /// Build an alphabet where `symbols[i]` encodes the value `i`
    pub(crate) fn new(symbols: &'static [u8]) -> Self {
        let mut reverse = [None; 128];
        for (value, &symbol) in symbols.iter().enumerate() {
            reverse[usize::from(symbol)] = Some(value as u8);
        }
        Self { symbols, reverse }
    }

    /// Number of symbols in the alphabet
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol for `value`
    ///
    /// # Panics
    ///
    /// Panics if `value` is not below [`len`](Self::len).
    pub fn symbol(&self, value: u8) -> char {
        char::from(self.symbols[usize::from(value)])
    }

    /// Value of `symbol`, or `None` if it is not part of the alphabet
    pub fn value(&self, symbol: char) -> Option<u8> {
        if !symbol.is_ascii() {
            return None;
        }
        self.reverse[symbol as usize]
    }

    /// Whether `symbol` belongs to the alphabet
    pub fn contains(&self, symbol: char) -> bool {
        self.value(symbol).is_some()
    }

    /// All symbols in value order
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().map(|&b| char::from(b))
    }
}

/// Join `head` and `tail`, left-padding the tail with '0's so the result
/// reaches `target_length` characters
pub(crate) fn pad_after_head(head: char, tail: &str, target_length: usize) -> String {
    let padding = target_length.saturating_sub(1 + tail.len());
    let mut result = String::with_capacity(1 + padding + tail.len());
    result.push(head);
    result.extend(std::iter::repeat('0').take(padding));
    result.push_str(tail);
    result
}
