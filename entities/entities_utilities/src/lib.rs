//! Entities Layer: Utilities
//!
//! Provides utility types shared by the encoding layers:
//! - Big natural number with radix and byte conversions

pub mod big;

pub use big::{BigNatural, MAX_RADIX, MIN_RADIX};
