//! UTF-8 string wrappers around the byte codec.

use crate::{decode, encode, Base64Error, Options};

/// Encodes the UTF-8 bytes of `text`.
///
/// ```
/// use b64_codec::{encode_string, Options};
///
/// assert_eq!(encode_string("Man", Options::default()), "TWFu");
/// assert_eq!(encode_string("€", Options::default()), "4oKs");
/// ```
pub fn encode_string(text: &str, options: Options) -> String {
    encode(text.as_bytes(), options)
}

/// Decodes base64 text and interprets the bytes as UTF-8.
///
/// # Errors
///
/// Any error from [`decode`](crate::decode), or [`Base64Error::InvalidUtf8`]
/// if the decoded bytes are not valid UTF-8.
///
/// ```
/// use b64_codec::{decode_string, Options};
///
/// assert_eq!(decode_string("4oKs", Options::default()).unwrap(), "€");
/// ```
pub fn decode_string(text: &str, options: Options) -> Result<String, Base64Error> {
    let bytes = decode(text, options)?;
    Ok(String::from_utf8(bytes)?)
}
