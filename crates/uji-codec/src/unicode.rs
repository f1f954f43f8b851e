use data_encoding::HEXLOWER;

use crate::codec::TextCodec;
use crate::error::Error;

const ESCAPE: &str = "\\u";

/// `\uXXXX` escapes, one per UTF-16 code unit.
///
/// Decoding is permissive: text between escape sequences is taken literally, so
/// plain text with no escapes at all decodes to itself. An escape must carry exactly
/// four hex digits, and surrogates must pair up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeEscape;

impl UnicodeEscape {
    pub fn escape(text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 6);

        for unit in text.encode_utf16() {
            out.push_str(ESCAPE);
            out.push_str(&HEXLOWER.encode(&unit.to_be_bytes()));
        }

        out
    }

    pub fn unescape(text: &str) -> Result<String, Error> {
        let mut units: Vec<u16> = Vec::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(ESCAPE) {
            units.extend(rest[..start].encode_utf16());

            let digits = rest
                .get(start + 2..start + 6)
                .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
                .ok_or(Error::UndecodableUnicode)?;

            let unit = u16::from_str_radix(digits, 16).map_err(|_| Error::UndecodableUnicode)?;
            units.push(unit);

            rest = &rest[start + 6..];
        }

        units.extend(rest.encode_utf16());

        String::from_utf16(&units).map_err(|_| Error::UndecodableUnicode)
    }
}

impl TextCodec for UnicodeEscape {
    fn encode(&self, data: &[u8]) -> String {
        Self::escape(&String::from_utf8_lossy(data))
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        Self::unescape(text).map(String::into_bytes)
    }
}
