//! Base64 encoding and decoding.
//!
//! This crate provides base64 encoding/decoding with support for:
//! - Standard and URL-safe alphabets
//! - Optional `=` padding
//! - Line wrapping with `\r\n` on encode
//! - Tolerant decoding that skips characters outside the alphabet
//!
//! Every function is a pure transform configured by an [`Options`] value.
//!
//! # Example
//!
//! ```
//! use b64_codec::{decode, encode, Options};
//!
//! let data = b"hello world";
//! let encoded = encode(data, Options::default());
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! let decoded = decode(&encoded, Options::default()).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod decode;
mod encode;
mod options;
mod string;
mod variant;

use std::string::FromUtf8Error;

pub use constants::{
    ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES, LINE_ENDING, MIME_LINE_LENGTH,
    PAD,
};
pub use decode::{decode, decode_bytes};
pub use encode::{encode, encode_to_slice, encoded_len};
pub use options::Options;
pub use string::{decode_string, encode_string};
pub use variant::Variant;

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// Padded input whose sanitized length is not a multiple of 4, or (strict
    /// mode) unpadded input with a dangling single symbol.
    #[error("invalid base64 length: {length}")]
    InvalidLength { length: usize },
    /// Strict mode found `=` outside the trailing padding.
    #[error("unexpected padding at symbol {position}")]
    InvalidPadding { position: usize },
    /// The destination passed to [`encode_to_slice`] cannot hold the output.
    #[error("destination too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
    /// The decoded bytes are not valid UTF-8.
    #[error("decoded base64 is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}
