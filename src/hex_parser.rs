//! Hex byte-string parsing.
//!
//! Turns a line such as `"4a 21 0f"` into a bounded byte buffer. Parsing never
//! fails: tokens that are not hex degrade to `0`, out-of-range values keep only
//! their low 8 bits, and tokens past the buffer capacity are ignored.
//!
//! # Examples
//!
//! ```
//! use tetsuo::ByteBuffer;
//!
//! let buffer = ByteBuffer::parse("4a 21 0f");
//! assert_eq!(buffer.as_slice(), &[0x4a, 0x21, 0x0f]);
//! assert_eq!(buffer.to_hex_string(), "4a 21 0f");
//! ```

use std::fmt::Write as _;

/// Maximum number of bytes honoured from a single input line.
pub const MAX_BYTES: usize = 32;

/// Parses whitespace-separated hex tokens into `out`.
///
/// Each token is read like C's `strtol(token, NULL, 16)` and truncated to a
/// byte. At most `out.len()` tokens are consumed.
///
/// # Returns
/// The number of bytes written to the front of `out`.
pub fn parse_hex_bytes(input: &str, out: &mut [u8]) -> usize {
    let mut count = 0;
    for (slot, token) in out.iter_mut().zip(input.split_whitespace()) {
        *slot = parse_hex_token(token);
        count += 1;
    }
    count
}

/// Parses a single token with `strtol` base-16 rules and keeps the low byte.
///
/// Accepts an optional sign and an optional `0x`/`0X` prefix, then reads the
/// longest run of hex digits. Anything after that run is ignored; a token with
/// no digits yields `0`.
pub fn parse_hex_token(token: &str) -> u8 {
    let (negative, unsigned) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    // "0x" only counts as a prefix when a hex digit follows it ("0xg" is 0).
    let digits = match unsigned.get(..2) {
        Some("0x") | Some("0X")
            if unsigned[2..].starts_with(|c: char| c.is_ascii_hexdigit()) =>
        {
            &unsigned[2..]
        }
        _ => unsigned,
    };

    let run = digits
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(digits.len());
    if run == 0 {
        tracing::trace!(token, "token has no hex digits, using 0");
        return 0;
    }

    // strtol saturates on overflow before the caller truncates to a byte.
    let value = match i64::from_str_radix(&digits[..run], 16) {
        Ok(magnitude) if negative => magnitude.wrapping_neg(),
        Ok(magnitude) => magnitude,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    value as u8
}

/// Fixed-capacity byte sequence parsed once from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: [u8; MAX_BYTES],
    len: usize,
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self {
            bytes: [0; MAX_BYTES],
            len: 0,
        }
    }

    /// Parses up to [`MAX_BYTES`] hex tokens from `input`.
    pub fn parse(input: &str) -> Self {
        let mut buffer = Self::new();
        buffer.len = parse_hex_bytes(input, &mut buffer.bytes);
        buffer
    }

    /// Copies the first [`MAX_BYTES`] bytes of `bytes`.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut buffer = Self::new();
        buffer.len = bytes.len().min(MAX_BYTES);
        buffer.bytes[..buffer.len].copy_from_slice(&bytes[..buffer.len]);
        buffer
    }

    /// Returns the parsed bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Formats the buffer as two lowercase hex digits per byte, space separated.
    ///
    /// Feeding the result back to [`ByteBuffer::parse`] yields an equal buffer.
    pub fn to_hex_string(&self) -> String {
        let mut out = String::with_capacity(self.len * 3);
        for (i, byte) in self.as_slice().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:02x}", byte);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_tokens() {
        let buffer = ByteBuffer::parse("4a 21 0f");
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.as_slice(), &[0x4a, 0x21, 0x0f]);
    }

    #[test]
    fn test_parse_empty_and_blank_input() {
        assert!(ByteBuffer::parse("").is_empty());
        assert!(ByteBuffer::parse("   \t  ").is_empty());
    }

    #[test]
    fn test_zero_capacity_produces_nothing() {
        let mut out: [u8; 0] = [];
        assert_eq!(parse_hex_bytes("4a 21", &mut out), 0);
    }

    #[test]
    fn test_capacity_truncates_tokens() {
        let mut out = [0u8; 2];
        assert_eq!(parse_hex_bytes("01 02 03 04", &mut out), 2);
        assert_eq!(out, [0x01, 0x02]);

        let input = (0..40).map(|i| format!("{:x}", i)).collect::<Vec<_>>().join(" ");
        let buffer = ByteBuffer::parse(&input);
        assert_eq!(buffer.len(), MAX_BYTES);
        assert_eq!(buffer.as_slice()[31], 31);
    }

    #[test]
    fn test_mixed_whitespace_separators() {
        let buffer = ByteBuffer::parse("  ff\t00   7F \r");
        assert_eq!(buffer.as_slice(), &[0xff, 0x00, 0x7f]);
    }

    #[test]
    fn test_invalid_tokens_become_zero() {
        assert_eq!(parse_hex_token("zz"), 0);
        assert_eq!(parse_hex_token("-"), 0);
        assert_eq!(parse_hex_token("0x"), 0);
        assert_eq!(parse_hex_token("0xg"), 0);
        // Still counts as a byte.
        assert_eq!(ByteBuffer::parse("zz 10").as_slice(), &[0x00, 0x10]);
    }

    #[test]
    fn test_token_prefix_and_trailing_garbage() {
        assert_eq!(parse_hex_token("0x1F"), 0x1f);
        assert_eq!(parse_hex_token("0X1f"), 0x1f);
        assert_eq!(parse_hex_token("+a"), 0x0a);
        assert_eq!(parse_hex_token("4g"), 0x04);
        assert_eq!(parse_hex_token("c3,"), 0xc3);
    }

    #[test]
    fn test_out_of_range_values_keep_low_byte() {
        assert_eq!(parse_hex_token("100"), 0x00);
        assert_eq!(parse_hex_token("1ab"), 0xab);
        assert_eq!(parse_hex_token("-1"), 0xff);
        assert_eq!(parse_hex_token("-2"), 0xfe);
        // Overflow saturates to i64::MAX / i64::MIN first.
        assert_eq!(parse_hex_token("ffffffffffffffffffff"), 0xff);
        assert_eq!(parse_hex_token("-ffffffffffffffffffff"), 0x00);
    }

    #[test]
    fn test_from_slice_truncates() {
        let long: Vec<u8> = (0..64).collect();
        let buffer = ByteBuffer::from_slice(&long);
        assert_eq!(buffer.len(), MAX_BYTES);
        assert_eq!(buffer.as_slice(), &long[..MAX_BYTES]);
        assert_eq!(ByteBuffer::from_slice(&[7, 8]).as_slice(), &[7, 8]);
    }

    #[test]
    fn test_hex_string_formatting() {
        let buffer = ByteBuffer::parse("A 0 FF");
        assert_eq!(buffer.to_hex_string(), "0a 00 ff");
        assert_eq!(ByteBuffer::new().to_hex_string(), "");
    }
}
