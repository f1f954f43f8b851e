use data_encoding::{BASE64, BASE64_NOPAD, BASE64URL, BASE64URL_NOPAD};

use crate::codec::TextCodec;
use crate::error::Error;

/// Base64 in the standard (`+/`, padded) or url-safe (`-_`, unpadded) alphabet.
///
/// Decoding accepts input with or without padding in the codec's own alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64 {
    Standard,
    UrlSafe,
}

impl TextCodec for Base64 {
    fn encode(&self, data: &[u8]) -> String {
        match self {
            Base64::Standard => BASE64.encode(data),
            Base64::UrlSafe => BASE64URL_NOPAD.encode(data),
        }
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        let input = text.as_bytes();

        let decoded = match self {
            Base64::Standard => BASE64
                .decode(input)
                .or_else(|_| BASE64_NOPAD.decode(input)),
            Base64::UrlSafe => BASE64URL_NOPAD
                .decode(input)
                .or_else(|_| BASE64URL.decode(input)),
        };

        decoded.map_err(|_| Error::InvalidBase64)
    }
}
