//! Base64 decoding.

use crate::constants::PAD_BYTE;
use crate::options::Options;
use crate::variant::ABSENT;
use crate::Base64Error;

/// Drops every byte that is neither an alphabet symbol nor `=`.
fn sanitize(input: &[u8], table: &[i8; 256]) -> Vec<u8> {
    input
        .iter()
        .copied()
        .filter(|&b| b == PAD_BYTE || table[b as usize] != ABSENT)
        .collect()
}

/// Number of trailing `=` that count as padding (at most two).
fn trailing_padding(sanitized: &[u8]) -> usize {
    sanitized
        .iter()
        .rev()
        .take(2)
        .take_while(|&&b| b == PAD_BYTE)
        .count()
}

fn check_strict(sanitized: &[u8], padding: usize, options: Options) -> Result<(), Base64Error> {
    let data = &sanitized[..sanitized.len() - padding];
    if let Some(position) = data.iter().position(|&b| b == PAD_BYTE) {
        return Err(Base64Error::InvalidPadding { position });
    }
    if !options.padding && sanitized.len() % 4 == 1 {
        return Err(Base64Error::InvalidLength {
            length: sanitized.len(),
        });
    }
    Ok(())
}

/// Decodes base64 from an ASCII byte slice.
///
/// Bytes outside the variant's alphabet (other than `=`) are removed before
/// anything else happens, so line breaks and stray punctuation are ignored.
///
/// # Errors
///
/// * [`Base64Error::InvalidLength`] if `options.padding` is set and the
///   sanitized input length is not a multiple of 4.
/// * With `options.strict`, [`Base64Error::InvalidPadding`] for a `=` that is
///   not trailing padding (positions count sanitized symbols), and
///   [`Base64Error::InvalidLength`] for unpadded input one symbol past a full
///   group.
///
/// Without `strict`, a `=` inside the data contributes zero bits.
///
/// # Example
///
/// ```
/// use b64_codec::{decode_bytes, Options};
///
/// let decoded = decode_bytes(b"aGVs\r\nbG8=", Options::default()).unwrap();
/// assert_eq!(decoded, b"hello");
/// ```
pub fn decode_bytes(input: &[u8], options: Options) -> Result<Vec<u8>, Base64Error> {
    let table = options.variant.decode_table();
    let sanitized = sanitize(input, table);
    let length = sanitized.len();

    if length != input.len() {
        tracing::trace!(
            stripped = input.len() - length,
            "base64 decode removed non-alphabet bytes"
        );
    }

    if options.padding && length % 4 != 0 {
        return Err(Base64Error::InvalidLength { length });
    }

    let padding = if options.padding {
        trailing_padding(&sanitized)
    } else {
        0
    };

    if options.strict {
        check_strict(&sanitized, padding, options)?;
    }

    let out_len = (length * 3 / 4).saturating_sub(padding);
    tracing::trace!(length, padding, out_len, ?options.variant, "base64 decode");

    let value = |b: u8| -> u32 {
        let v = table[b as usize];
        if v == ABSENT {
            0
        } else {
            v as u32
        }
    };

    let mut out = Vec::with_capacity(out_len);
    'groups: for group in sanitized.chunks(4) {
        let mut n = 0u32;
        for i in 0..4 {
            let v = group.get(i).map_or(0, |&b| value(b));
            n |= v << (18 - 6 * i);
        }
        for shift in [16, 8, 0] {
            if out.len() == out_len {
                break 'groups;
            }
            out.push((n >> shift) as u8);
        }
    }

    Ok(out)
}

/// Decodes base64 text to bytes.
///
/// See [`decode_bytes`] for how the input is cleaned up and which errors
/// can occur.
///
/// # Example
///
/// ```
/// use b64_codec::{decode, Base64Error, Options};
///
/// assert_eq!(decode("TWFu", Options::default()).unwrap(), b"Man");
/// assert_eq!(decode("TW\r\nFu", Options::default()).unwrap(), b"Man");
/// assert_eq!(
///     decode("TWF", Options::default()),
///     Err(Base64Error::InvalidLength { length: 3 })
/// );
/// assert_eq!(decode("TWF", Options::STANDARD_NO_PAD).unwrap(), b"Ma");
/// ```
pub fn decode(text: &str, options: Options) -> Result<Vec<u8>, Base64Error> {
    decode_bytes(text.as_bytes(), options)
}
