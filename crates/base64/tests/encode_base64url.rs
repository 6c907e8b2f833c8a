//! Tests for URL-safe base64 encoding.

use b64_codec::{encode, Options};
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine as _;
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let base64url = encode(&blob, Options::URL_SAFE_NO_PAD);

        assert!(!base64url.contains('+'));
        assert!(!base64url.contains('/'));
        assert!(!base64url.contains('='));
        assert_eq!(base64url, URL_SAFE_NO_PAD.encode(&blob));
    }
}

#[test]
fn padded() {
    for _ in 0..100 {
        let blob = generate_blob();
        assert_eq!(encode(&blob, Options::URL_SAFE), URL_SAFE.encode(&blob));
    }
}

#[test]
fn differs_from_standard_only_in_last_two_symbols() {
    for _ in 0..100 {
        let blob = generate_blob();
        let standard = encode(&blob, Options::STANDARD);
        let url = encode(&blob, Options::URL_SAFE);
        assert_eq!(standard.len(), url.len());
        for (s, u) in standard.chars().zip(url.chars()) {
            match s {
                '+' => assert_eq!(u, '-'),
                '/' => assert_eq!(u, '_'),
                _ => assert_eq!(u, s),
            }
        }
    }
}

#[test]
fn empty_input() {
    assert_eq!(encode(b"", Options::URL_SAFE_NO_PAD), "");
}

#[test]
fn single_byte() {
    assert_eq!(encode(b"f", Options::URL_SAFE_NO_PAD), "Zg");
}

#[test]
fn two_bytes() {
    assert_eq!(encode(b"fo", Options::URL_SAFE_NO_PAD), "Zm8");
}

#[test]
fn three_bytes() {
    assert_eq!(encode(b"foo", Options::URL_SAFE_NO_PAD), "Zm9v");
}
