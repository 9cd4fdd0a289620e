//! Use Cases Layer: Key Identity
//!
//! Provides human-readable numeric identifiers for public keys.
//!
//! ## Overview
//!
//! The `usecases_key_identity` crate is part of the use cases layer. A
//! [`PublicKey`] renders itself through the infrastructure encodings:
//!
//! - **number**: Base810, 79 digits, exact
//! - **short number**: first 12 digits of the number, for display only
//! - **chat number**: phone number encoding, 82 digits; readers may add
//!   `5`s anywhere to chunk it visually
//!
//! Signature verification and the alphanumeric key format live elsewhere.
//!
//! ## See Also
//!
//! - [`infrastructure_phone_encoding`](../../infrastructure/infrastructure_phone_encoding/index.html): Codecs

pub mod public_key;

pub use public_key::{
    IdentityError, IdentityResult, PublicKey, CHAT_NUMBER_LENGTH, NUMBER_LENGTH,
    SHORT_NUMBER_LENGTH,
};
