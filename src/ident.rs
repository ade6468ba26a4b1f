//! Ident payload transforms
//!
//! An ident travels in three forms: the plaintext string, its
//! deflate-compressed UTF-8 bytes, and the uppercase hex rendering of those
//! bytes. [`encode`] and [`decode`] are exact inverses; the hex form is what
//! gets pasted into source as the `b_ident` literal.

use crate::codec;
use anyhow::Result;
use thiserror::Error;

/// The hex blob embedded in the `decodeident` binary. Regenerate it with
/// `newident` and paste the new value here.
pub const B_IDENT: &str = "789CF3CBCC0DC849CC2B51703652084E2D2A4B2D02003B5C0650";

/// Failure to turn a hex blob back into plaintext. One type covers all three
/// stages: malformed hex, a bad compressed stream, and non-UTF-8 output.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Hex(String),
    #[error("inflate failed: {0}")]
    Stream(String),
    #[error("decompressed data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode plaintext into its hex blob form: UTF-8 bytes, deflated, then
/// uppercase hex. Any Unicode input is accepted; the empty string is valid
/// and still yields a non-empty blob (the zlib container has fixed overhead).
pub fn encode(plaintext: &str) -> Result<String> {
    let compressed = codec::compress_deflate(plaintext.as_bytes())?;
    Ok(codec::encode_hex_string(&compressed))
}

/// Decode a hex blob back into plaintext. Total over malformed input: every
/// failure comes back as a [`DecodeError`], never a panic. Hex digits are
/// accepted in either case.
pub fn decode(hex_text: &str) -> Result<String, DecodeError> {
    let compressed =
        codec::decode_hex_string(hex_text).map_err(|e| DecodeError::Hex(e.to_string()))?;
    let bytes =
        codec::decompress_deflate(&compressed).map_err(|e| DecodeError::Stream(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// [`decode`], flattened to the legacy string contract: the plaintext on
/// success, `"An error occurred: <message>"` on failure. Only the CLI prints
/// through this; library callers should branch on [`decode`] instead.
pub fn decode_or_message(hex_text: &str) -> String {
    match decode(hex_text) {
        Ok(plaintext) => plaintext,
        Err(e) => format!("An error occurred: {}", e),
    }
}
