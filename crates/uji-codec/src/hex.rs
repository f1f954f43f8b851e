use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

use crate::codec::TextCodec;
use crate::error::Error;

/// Lowercase hex, two digits per byte.
pub fn as_hex(data: &[u8]) -> String {
    HEXLOWER.encode(data)
}

/// Decode hex of either case. The length must be even.
pub fn from_hex(text: &str) -> Result<Vec<u8>, Error> {
    HEXLOWER_PERMISSIVE
        .decode(text.as_bytes())
        .map_err(|_| Error::InvalidHex)
}

/// Byte-wise hex representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hex;

impl TextCodec for Hex {
    fn encode(&self, data: &[u8]) -> String {
        as_hex(data)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        from_hex(text)
    }
}
