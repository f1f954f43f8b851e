//! The codec trait and plain-text helpers.

use crate::base64::Base64;
use crate::error::Error;
use crate::hex::{as_hex, from_hex};

/// A reversible mapping between a byte sequence and one textual representation.
pub trait TextCodec: Send + Sync {
    /// Render `data` in this representation. Never fails.
    fn encode(&self, data: &[u8]) -> String;

    /// Parse `text` back into the bytes it represents.
    fn decode(&self, text: &str) -> Result<Vec<u8>, Error>;
}

/// Text as typed: its UTF-8 bytes. Bytes that are not UTF-8 render lossily.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl TextCodec for Plain {
    fn encode(&self, data: &[u8]) -> String {
        String::from_utf8_lossy(data).into_owned()
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        Ok(text.as_bytes().to_vec())
    }
}

/// Hex of the UTF-8 bytes of `text`, e.g. `"test"` is `"74657374"`.
pub fn string_to_hex(text: &str) -> String {
    as_hex(text.as_bytes())
}

/// Text whose UTF-8 bytes are `hex`; undecodable bytes render as U+FFFD.
pub fn hex_to_string(hex: &str) -> Result<String, Error> {
    let bytes = from_hex(hex)?;
    Ok(Plain.encode(&bytes))
}

/// Padded standard base64 of the UTF-8 bytes of `text`.
pub fn string_to_base64(text: &str) -> String {
    Base64::Standard.encode(text.as_bytes())
}

/// Unpadded url-safe base64 of the UTF-8 bytes of `text`.
pub fn string_to_base64url(text: &str) -> String {
    Base64::UrlSafe.encode(text.as_bytes())
}

/// Text whose UTF-8 bytes are `encoded`; padding is optional.
pub fn base64_to_string(encoded: &str) -> Result<String, Error> {
    let bytes = Base64::Standard.decode(encoded)?;
    Ok(Plain.encode(&bytes))
}
