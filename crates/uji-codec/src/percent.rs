use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode};

use crate::codec::TextCodec;
use crate::error::Error;

/// Bytes left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// URL percent-encoding with `encodeURIComponent` semantics.
///
/// Every byte outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is written as `%XX`. Decoding is
/// strict: a `%` must be followed by two hex digits and the decoded bytes must be UTF-8.
/// `+` is left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Percent;

impl TextCodec for Percent {
    fn encode(&self, data: &[u8]) -> String {
        percent_encode(data, URI_COMPONENT).to_string()
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        let input = text.as_bytes();

        // percent_decode passes malformed escapes through untouched, so reject them first
        let mut pos = 0;
        while let Some(offset) = input[pos..].iter().position(|&b| b == b'%') {
            let escape = pos + offset;
            match input.get(escape + 1..escape + 3) {
                Some(digits) if digits.iter().all(u8::is_ascii_hexdigit) => pos = escape + 3,
                _ => return Err(Error::UndecodableUrl),
            }
        }

        percent_decode_str(text)
            .decode_utf8()
            .map(|decoded| decoded.into_owned().into_bytes())
            .map_err(|_| Error::UndecodableUrl)
    }
}
