//! Tests for standard base64 encoding.

use b64_codec::{encode, encode_to_slice, encoded_len, Options};
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
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
        let result = encode(&blob, Options::default());
        let expected = STANDARD.encode(&blob);
        assert_eq!(result, expected, "Failed for blob of length {}", blob.len());
    }
}

#[test]
fn works_without_padding() {
    for _ in 0..100 {
        let blob = generate_blob();
        let result = encode(&blob, Options::STANDARD_NO_PAD);
        assert!(!result.contains('='));
        assert_eq!(result, STANDARD_NO_PAD.encode(&blob));
    }
}

#[test]
fn length_law() {
    for _ in 0..100 {
        let blob = generate_blob();
        let result = encode(&blob, Options::default());
        assert_eq!(result.len(), blob.len().div_ceil(3) * 4);
    }
}

#[test]
fn man_scenarios() {
    assert_eq!(encode(b"Man", Options::default()), "TWFu");
    assert_eq!(encode(b"Ma", Options::default()), "TWE=");
    assert_eq!(encode(b"M", Options::default()), "TQ==");
}

#[test]
fn empty_input() {
    assert_eq!(encode(b"", Options::default()), "");
    assert_eq!(encoded_len(0, Options::MIME), 0);
}

#[test]
fn hello_world() {
    assert_eq!(encode(b"hello world", Options::default()), "aGVsbG8gd29ybGQ=");
}

#[test]
fn slice_output_matches_string_output() {
    for _ in 0..100 {
        let blob = generate_blob();
        for opts in [Options::STANDARD, Options::URL_SAFE_NO_PAD, Options::MIME] {
            let mut dest = vec![0u8; encoded_len(blob.len(), opts)];
            let written = encode_to_slice(&blob, opts, &mut dest).unwrap();
            assert_eq!(written, dest.len());
            assert_eq!(dest, encode(&blob, opts).into_bytes());
        }
    }
}

#[test]
fn slice_output_with_spare_room() {
    let mut dest = vec![b'x'; 12];
    let written = encode_to_slice(b"fo", Options::default(), &mut dest).unwrap();
    assert_eq!(written, 4);
    assert_eq!(&dest[..], b"Zm8=xxxxxxxx");
}
