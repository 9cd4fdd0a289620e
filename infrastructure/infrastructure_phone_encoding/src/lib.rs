//! Infrastructure Layer: Phone Number Encoding
//!
//! Provides human-friendly numeric encodings for fixed-size binary buffers,
//! typically 32-byte public keys. The encoded strings look like phone numbers
//! but never start with 0 or 1, so they are not dialable in most numbering
//! plans, and they decode back to the exact original bytes.
//!
//! ## Overview
//!
//! The `infrastructure_phone_encoding` crate is part of the infrastructure layer.
//! Both codecs treat the buffer as a big-endian number and split it into a
//! head digit, carrying the most significant bits, and a zero-padded tail.
//!
//! ## Codecs
//!
//! - **[`base810_codec`](base810_codec/index.html)**: 3-bit head digit (`2`-`9`)
//!   followed by a decimal tail. A 32-byte key takes 79 digits.
//!
//! - **[`phone_number_codec`](phone_number_codec/index.html)**: 2-bit head digit
//!   (`2`, `3`, `4`, `6`) followed by a base 9 tail that never uses `5`. Decoding
//!   ignores noise before the head and any number of `5`s. A 32-byte key takes
//!   82 digits.
//!
//! ## Architecture
//!
//! Both codecs are stateless unit structs implementing [`NumericCodec`]. The
//! only shared data are the head alphabets, initialized once and read-only
//! afterwards, so every function here can be called from any thread.
//! Arbitrary precision arithmetic comes from the Entities layer.
//!
//! ## See Also
//!
//! - [`entities_utilities`](../../entities/entities_utilities/index.html): BigNatural type

mod common;

pub mod base810_codec;
pub mod phone_number_codec;

pub use base810_codec::{octal_head_alphabet, Base810Codec};
pub use phone_number_codec::{
    quaternary_head_alphabet, shift_base9, unshift_base9, PhoneNumberCodec, FILLER_DIGIT,
    IGNORED_PREFIX,
};

pub use common::{CodecKind, DigitAlphabet, NumericCodec};

// Re-export error types for convenience
pub use common::{CodecError, CodecResult, InvalidReason};

pub use common::{BASE810_KEY_LENGTH, KEY_SIZE, PHONE_NUMBER_KEY_LENGTH};
