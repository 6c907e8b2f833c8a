//! Per-call codec configuration.

use crate::constants::MIME_LINE_LENGTH;
use crate::variant::Variant;

/// Configuration consumed by every encode and decode call.
///
/// `Options` is a plain value; nothing is cached between calls.
///
/// # Example
///
/// ```
/// use b64_codec::{encode, Options, Variant};
///
/// let opts = Options::new().with_variant(Variant::UrlSafe).with_padding(false);
/// assert_eq!(encode(&[0xfb, 0xff], opts), "-_8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Alphabet to use.
    pub variant: Variant,
    /// Emit `=` on encode; require a length that is a multiple of 4 on decode.
    pub padding: bool,
    /// Insert `\r\n` after this many symbols on encode. `0` disables wrapping.
    /// Ignored by decode.
    pub line_length: usize,
    /// Reject misplaced `=` and impossible lengths on decode instead of
    /// reading them as zero bits. Ignored by encode.
    pub strict: bool,
}

impl Options {
    /// Standard alphabet, padded, unwrapped.
    pub const STANDARD: Options = Options {
        variant: Variant::Standard,
        padding: true,
        line_length: 0,
        strict: false,
    };

    /// Standard alphabet without padding.
    pub const STANDARD_NO_PAD: Options = Options::STANDARD.with_padding(false);

    /// URL-safe alphabet, padded.
    pub const URL_SAFE: Options = Options::STANDARD.with_variant(Variant::UrlSafe);

    /// URL-safe alphabet without padding.
    pub const URL_SAFE_NO_PAD: Options = Options::URL_SAFE.with_padding(false);

    /// Standard alphabet, padded, wrapped at 76 symbols per line.
    pub const MIME: Options = Options::STANDARD.with_line_length(MIME_LINE_LENGTH);

    /// Same as [`Options::default`].
    pub const fn new() -> Self {
        Options::STANDARD
    }

    pub const fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub const fn with_padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    pub const fn with_line_length(mut self, line_length: usize) -> Self {
        self.line_length = line_length;
        self
    }

    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub(crate) const fn wraps(&self) -> bool {
        self.line_length > 0
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Options::default();
        assert_eq!(opts.variant, Variant::Standard);
        assert!(opts.padding);
        assert_eq!(opts.line_length, 0);
        assert!(!opts.strict);
        assert_eq!(opts, Options::new());
    }

    #[test]
    fn presets() {
        assert_eq!(Options::URL_SAFE_NO_PAD.variant, Variant::UrlSafe);
        assert!(!Options::URL_SAFE_NO_PAD.padding);
        assert!(!Options::STANDARD_NO_PAD.padding);
        assert_eq!(Options::MIME.line_length, 76);
        assert!(Options::MIME.wraps());
        assert!(!Options::STANDARD.wraps());
    }
}
