//! Alphabet selection and the per-variant lookup tables.

use crate::constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES};

/// Marker stored in a decode table for bytes outside the alphabet.
pub(crate) const ABSENT: i8 = -1;

/// Builds the reverse lookup for a 64-symbol alphabet.
///
/// Every byte that is not a symbol of `alphabet` maps to [`ABSENT`].
const fn build_decode_table(alphabet: &[u8; 64]) -> [i8; 256] {
    let mut table = [ABSENT; 256];
    let mut i = 0;
    while i < 64 {
        table[alphabet[i] as usize] = i as i8;
        i += 1;
    }
    table
}

static STANDARD_DECODE: [i8; 256] = build_decode_table(ALPHABET_BYTES);
static URL_SAFE_DECODE: [i8; 256] = build_decode_table(ALPHABET_URL_BYTES);

/// Which 64-symbol alphabet to encode with or decode from.
///
/// The two alphabets agree on the first 62 symbols and differ only in the
/// symbols for values 62 and 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Variant {
    /// RFC 4648 section 4 alphabet, `+` and `/`.
    #[default]
    Standard,
    /// RFC 4648 section 5 alphabet, `-` and `_`.
    UrlSafe,
}

impl Variant {
    /// The alphabet as a string.
    ///
    /// ```
    /// use b64_codec::Variant;
    ///
    /// assert!(Variant::UrlSafe.alphabet().ends_with("-_"));
    /// ```
    pub const fn alphabet(self) -> &'static str {
        match self {
            Variant::Standard => ALPHABET,
            Variant::UrlSafe => ALPHABET_URL,
        }
    }

    /// The alphabet as bytes; index `i` is the symbol for the 6-bit value `i`.
    pub const fn alphabet_bytes(self) -> &'static [u8; 64] {
        match self {
            Variant::Standard => ALPHABET_BYTES,
            Variant::UrlSafe => ALPHABET_URL_BYTES,
        }
    }

    /// Reverse lookup indexed by byte value. Bytes outside the alphabet hold `-1`.
    pub fn decode_table(self) -> &'static [i8; 256] {
        match self {
            Variant::Standard => &STANDARD_DECODE,
            Variant::UrlSafe => &URL_SAFE_DECODE,
        }
    }

    /// The 6-bit value of `symbol`, or `None` if it is not part of this alphabet.
    ///
    /// ```
    /// use b64_codec::Variant;
    ///
    /// assert_eq!(Variant::Standard.symbol_value(b'/'), Some(63));
    /// assert_eq!(Variant::UrlSafe.symbol_value(b'/'), None);
    /// assert_eq!(Variant::UrlSafe.symbol_value(b'_'), Some(63));
    /// ```
    pub fn symbol_value(self, symbol: u8) -> Option<u8> {
        let value = self.decode_table()[symbol as usize];
        if value == ABSENT {
            None
        } else {
            Some(value as u8)
        }
    }

    /// Encodes a 6-bit value. Only the low six bits of `value` are used.
    #[inline]
    pub(crate) fn symbol(self, value: u32) -> u8 {
        self.alphabet_bytes()[(value & 0x3f) as usize]
    }
}
