//! Public Key Module
//!
//! Provides the public key identity type and its numeric representations:
//! - Number: Base810 at 79 digits
//! - Short number: leading digits of the number, for display
//! - Chat number: phone number encoding at 82 digits, tolerant of fillers

use std::fmt;
use std::str::FromStr;

use infrastructure_phone_encoding::{
    Base810Codec, CodecError, NumericCodec, PhoneNumberCodec, BASE810_KEY_LENGTH, KEY_SIZE,
    PHONE_NUMBER_KEY_LENGTH,
};
use thiserror::Error;

/// Width of [`PublicKey::number`]
pub const NUMBER_LENGTH: usize = BASE810_KEY_LENGTH;

/// Width of [`PublicKey::short_number`]
pub const SHORT_NUMBER_LENGTH: usize = 12;

/// Width of [`PublicKey::chat_number`]
pub const CHAT_NUMBER_LENGTH: usize = PHONE_NUMBER_KEY_LENGTH;

/// Identity errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// Raw key has the wrong size
    #[error("Invalid public key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
    /// Numeric representation did not decode
    #[error(transparent)]
    Encoding(#[from] CodecError),
}

/// Result type for identity operations
pub type IdentityResult<T> = Result<T, IdentityError>;

/// A 32 byte Curve25519 (x25519) public key
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; KEY_SIZE]);

impl PublicKey {
    /// Wrap raw key bytes
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy key bytes from a slice
    ///
    /// # Returns
    /// * `Ok(key)` - The slice was exactly 32 bytes
    /// * `Err(IdentityError::InvalidKeyLength)` - Any other length
    pub fn from_bytes(bytes: &[u8]) -> IdentityResult<Self> {
        let key: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| IdentityError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(key))
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Numeric representation of this key using Base810 encoding
    pub fn number(&self) -> String {
        Base810Codec.encode_to_string(&self.0, NUMBER_LENGTH)
    }

    /// Leading digits of [`number`](Self::number)
    ///
    /// Not unique and not decodable; meant for showing a key at a glance.
    pub fn short_number(&self) -> String {
        let mut number = self.number();
        number.truncate(SHORT_NUMBER_LENGTH);
        number
    }

    /// Parse a numeric Base810 representation back into a key
    pub fn from_number(number: &str) -> IdentityResult<Self> {
        let bytes = Base810Codec.decode_string(number, KEY_SIZE)?;
        Self::from_bytes(&bytes)
    }

    /// Numeric representation of this key using phone number encoding
    pub fn chat_number(&self) -> String {
        PhoneNumberCodec.encode_to_string(&self.0, CHAT_NUMBER_LENGTH)
    }

    /// Parse a chat number into a key
    ///
    /// Leading noise and `5`s used to visually chunk the number are ignored.
    pub fn from_chat_number(chat_number: &str) -> IdentityResult<Self> {
        let bytes = PhoneNumberCodec.decode_string(chat_number, KEY_SIZE)?;
        Self::from_bytes(&bytes)
    }
}

impl From<[u8; KEY_SIZE]> for PublicKey {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.number())
    }
}

/// Displays the key as its number
impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number())
    }
}

impl FromStr for PublicKey {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_number(s)
    }
}
