//! Integration tests for usecases_key_identity crate
//!
//! These tests verify that public keys survive the trip through their
//! numeric representations.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use usecases_key_identity::*;

fn random_key(rng: &mut StdRng) -> PublicKey {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    PublicKey::new(bytes)
}

#[test]
fn test_number_roundtrip() {
    let mut rng = StdRng::seed_from_u64(79);
    for _ in 0..1_000 {
        let key = random_key(&mut rng);
        let number = key.number();
        assert_eq!(number.len(), NUMBER_LENGTH);
        let parsed = PublicKey::from_number(&number).unwrap();
        assert_eq!(parsed.number(), number);
        assert_eq!(parsed, key);
    }
}

#[test]
fn test_chat_number_roundtrip_with_chunking() {
    let mut rng = StdRng::seed_from_u64(82);
    for _ in 0..1_000 {
        let key = random_key(&mut rng);
        let chat_number = key.chat_number();
        assert_eq!(chat_number.len(), CHAT_NUMBER_LENGTH);

        // chunk into groups of 4 separated by 5s, as a reader might write it down
        let chunked: Vec<String> = chat_number
            .as_bytes()
            .chunks(4)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect();
        let chunked = chunked.join("5");
        assert_eq!(PublicKey::from_chat_number(&chunked).unwrap(), key);
    }
}

#[test]
fn test_short_number() {
    let mut rng = StdRng::seed_from_u64(12);
    let key = random_key(&mut rng);
    assert_eq!(key.short_number().len(), SHORT_NUMBER_LENGTH);
    assert!(key.number().starts_with(&key.short_number()));
}

#[test]
fn test_head_digits_follow_top_bits() {
    // 0xee = 0b1110_1110
    let key = PublicKey::new([0xee; 32]);
    assert!(key.number().starts_with('9'));
    assert!(key.chat_number().starts_with('6'));
}

#[test]
fn test_from_number_rejects_garbage() {
    assert!(PublicKey::from_number("").is_err());
    assert!("hello".parse::<PublicKey>().is_err());
    assert!(PublicKey::from_chat_number("0000").is_err());
}
