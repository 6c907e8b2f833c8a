//! Base64 encoding.

use crate::constants::{LINE_ENDING, PAD_BYTE};
use crate::options::Options;
use crate::variant::Variant;
use crate::Base64Error;

/// Destination for encoded bytes. Everything pushed is ASCII.
trait Output {
    fn put(&mut self, byte: u8);
}

impl Output for String {
    #[inline]
    fn put(&mut self, byte: u8) {
        self.push(byte as char);
    }
}

/// Writes into a caller buffer already checked to be large enough.
struct SliceOutput<'a> {
    dest: &'a mut [u8],
    written: usize,
}

impl Output for SliceOutput<'_> {
    #[inline]
    fn put(&mut self, byte: u8) {
        self.dest[self.written] = byte;
        self.written += 1;
    }
}

/// Maps 6-bit values through the alphabet and wraps lines.
struct Emitter<'o, O: Output> {
    out: &'o mut O,
    variant: Variant,
    line_length: usize,
    column: usize,
}

impl<'o, O: Output> Emitter<'o, O> {
    fn new(out: &'o mut O, options: Options) -> Self {
        Emitter {
            out,
            variant: options.variant,
            line_length: options.line_length,
            column: 0,
        }
    }

    #[inline]
    fn raw(&mut self, byte: u8) {
        self.out.put(byte);
        if self.line_length == 0 {
            return;
        }
        self.column += 1;
        if self.column == self.line_length {
            self.line_break();
        }
    }

    #[inline]
    fn symbol(&mut self, value: u32) {
        let byte = self.variant.symbol(value);
        self.raw(byte);
    }

    fn line_break(&mut self) {
        for &b in LINE_ENDING.as_bytes() {
            self.out.put(b);
        }
        self.column = 0;
    }

    /// Terminates a partially filled last line.
    fn finish_line(&mut self) {
        if self.line_length > 0 && self.column != 0 {
            self.line_break();
        }
    }
}

fn encode_with<O: Output>(bytes: &[u8], options: Options, out: &mut O) {
    let mut emitter = Emitter::new(out, options);

    let mut groups = bytes.chunks_exact(3);
    for group in &mut groups {
        let n = ((group[0] as u32) << 16) | ((group[1] as u32) << 8) | group[2] as u32;
        emitter.symbol(n >> 18);
        emitter.symbol(n >> 12);
        emitter.symbol(n >> 6);
        emitter.symbol(n);
    }

    let tail = groups.remainder();
    if tail.is_empty() {
        return;
    }

    let b0 = tail[0] as u32;
    let b1 = tail.get(1).copied().unwrap_or(0) as u32;
    let n = (b0 << 16) | (b1 << 8);

    emitter.symbol(n >> 18);
    emitter.symbol(n >> 12);
    if tail.len() == 2 {
        emitter.symbol(n >> 6);
    } else if options.padding {
        emitter.raw(PAD_BYTE);
    }
    if options.padding {
        emitter.raw(PAD_BYTE);
    }

    emitter.finish_line();
}

/// Number of alphabet and padding symbols produced for `len` input bytes.
fn symbol_count(len: usize, padding: bool) -> usize {
    let full = len / 3 * 4;
    match (len % 3, padding) {
        (0, _) => full,
        (_, true) => full + 4,
        (1, false) => full + 2,
        _ => full + 3,
    }
}

/// Exact length of the text [`encode`] produces for `len` input bytes,
/// including line terminators.
///
/// # Example
///
/// ```
/// use b64_codec::{encoded_len, Options};
///
/// assert_eq!(encoded_len(5, Options::STANDARD), 8);
/// assert_eq!(encoded_len(5, Options::STANDARD_NO_PAD), 7);
/// assert_eq!(encoded_len(57, Options::MIME), 78);
/// ```
pub fn encoded_len(len: usize, options: Options) -> usize {
    let symbols = symbol_count(len, options.padding);
    if !options.wraps() || symbols == 0 {
        return symbols;
    }
    let mut breaks = symbols / options.line_length;
    if len % 3 != 0 && symbols % options.line_length != 0 {
        breaks += 1;
    }
    symbols + breaks * LINE_ENDING.len()
}

/// Encodes a byte slice to base64 text.
///
/// # Arguments
///
/// * `bytes` - The bytes to encode.
/// * `options` - Alphabet, padding and line wrapping.
///
/// # Returns
///
/// The encoded text. Empty input always gives an empty string.
///
/// # Example
///
/// ```
/// use b64_codec::{encode, Options};
///
/// assert_eq!(encode(b"Man", Options::default()), "TWFu");
/// assert_eq!(encode(b"Ma", Options::default()), "TWE=");
/// assert_eq!(encode(b"M", Options::default()), "TQ==");
/// assert_eq!(encode(b"M", Options::STANDARD_NO_PAD), "TQ");
/// ```
pub fn encode(bytes: &[u8], options: Options) -> String {
    tracing::trace!(len = bytes.len(), ?options, "base64 encode");
    let mut out = String::with_capacity(encoded_len(bytes.len(), options));
    encode_with(bytes, options, &mut out);
    out
}

/// Encodes `bytes` into `dest`, returning the number of bytes written.
///
/// # Errors
///
/// Returns [`Base64Error::BufferTooSmall`] if `dest` is shorter than
/// [`encoded_len`]. Nothing is written in that case.
///
/// # Example
///
/// ```
/// use b64_codec::{encode_to_slice, Options};
///
/// let mut dest = [0u8; 16];
/// let len = encode_to_slice(b"hello", Options::default(), &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"aGVsbG8=");
/// ```
pub fn encode_to_slice(
    bytes: &[u8],
    options: Options,
    dest: &mut [u8],
) -> Result<usize, Base64Error> {
    let needed = encoded_len(bytes.len(), options);
    if dest.len() < needed {
        return Err(Base64Error::BufferTooSmall {
            needed,
            available: dest.len(),
        });
    }
    let mut out = SliceOutput { dest, written: 0 };
    encode_with(bytes, options, &mut out);
    Ok(out.written)
}
