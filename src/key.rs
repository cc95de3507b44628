//! Base58 private keys as comb input.
//!
//! A Solana-style key is Base58 text. Its first 32 decoded bytes are the
//! secret key, which is exactly one full comb. These helpers convert between
//! that text and the space-separated hex line the viewer reads.
//!
//! # Examples
//!
//! ```
//! use tetsuo::key::{decode_private_key, encode_private_key};
//!
//! let bytes = decode_private_key("112").unwrap();
//! assert_eq!(bytes.as_slice(), &[0x00, 0x00, 0x01]);
//! assert_eq!(encode_private_key(bytes.as_slice()), "112");
//! ```

use anyhow::{anyhow, Result};

use crate::hex_parser::ByteBuffer;

/// Decodes a Base58 key and keeps its first [`MAX_BYTES`](crate::MAX_BYTES) bytes.
///
/// Each leading `'1'` decodes to a leading zero byte. A 64-byte keypair
/// therefore yields its 32-byte secret half.
pub fn decode_private_key(key: &str) -> Result<ByteBuffer> {
    let decoded = bs58::decode(key.trim())
        .into_vec()
        .map_err(|e| anyhow!("invalid Base58 key: {}", e))?;
    Ok(ByteBuffer::from_slice(&decoded))
}

/// Encodes bytes as Base58, one leading `'1'` per leading zero byte.
pub fn encode_private_key(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Converts a Base58 key to the hex line the viewer takes as input.
pub fn private_key_to_hex(key: &str) -> Result<String> {
    Ok(decode_private_key(key)?.to_hex_string())
}

/// Converts a hex byte line back to a Base58 key.
pub fn hex_to_private_key(line: &str) -> String {
    encode_private_key(ByteBuffer::parse(line).as_slice())
}
