//! The hash form: MD5 and SHA digests of text, or of bytes given as hex.

use std::fmt::{Display, Formatter};

use aws_lc_rs::digest::{SHA1_FOR_LEGACY_USE_ONLY, SHA256, SHA512, digest};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};
use uji_codec::{Base64, TextCodec, as_hex, from_hex};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Raw digest of `data`.
    pub fn hash(self, data: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Md5 => md5::compute(data).0.to_vec(),
            Algorithm::Sha1 => digest(&SHA1_FOR_LEGACY_USE_ONLY, data).as_ref().to_vec(),
            Algorithm::Sha256 => digest(&SHA256, data).as_ref().to_vec(),
            Algorithm::Sha512 => digest(&SHA512, data).as_ref().to_vec(),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A digest in the three renderings the form shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Digest {
    pub hex: String,
    pub base64: String,
    pub base64url: String,
}

impl From<&[u8]> for Digest {
    fn from(raw: &[u8]) -> Self {
        Digest {
            hex: as_hex(raw),
            base64: Base64::Standard.encode(raw),
            base64url: Base64::UrlSafe.encode(raw),
        }
    }
}

/// One [`Digest`] per [`Algorithm`]; all empty when nothing has been hashed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digests {
    values: [Digest; Algorithm::ALL.len()],
}

impl Digests {
    pub fn compute(data: &[u8]) -> Self {
        Digests {
            values: Algorithm::ALL.map(|alg| Digest::from(alg.hash(data).as_slice())),
        }
    }

    pub fn get(&self, algorithm: Algorithm) -> &Digest {
        &self.values[algorithm as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|d| d.hex.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &Digest)> {
        Algorithm::ALL.into_iter().map(|alg| (alg, self.get(alg)))
    }
}

impl Serialize for Digests {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (alg, value) in self.iter() {
            map.serialize_entry(alg.name(), value)?;
        }
        map.end()
    }
}

/// What the user typed: text, or the hex of the bytes to hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashInput<'a> {
    Plain(&'a str),
    Hex(&'a str),
}

impl HashInput<'_> {
    fn raw(&self) -> &str {
        match self {
            HashInput::Plain(raw) | HashInput::Hex(raw) => raw,
        }
    }
}

/// Advisory attached to a result; never blocks hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// Hex input decoded to bytes that do not display as text.
    Mojibake,
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::Mojibake => f.write_str("the value shown as text may be garbled (mojibake)"),
        }
    }
}

impl Serialize for Warning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DigestSet {
    pub plain: String,
    pub hex: String,
    pub digests: Digests,
    pub warning: Option<Warning>,
}

/// Hash the bytes behind `input`.
///
/// Text is hashed as its UTF-8 bytes. Hex is decoded and the literal bytes are hashed;
/// if they are not displayable text the result carries [`Warning::Mojibake`] and
/// `plain` shows a lossy rendering. Invalid hex yields
/// [`Error::InvalidHexForHashing`] and nothing is hashed.
pub fn compute_digests(input: HashInput<'_>) -> Result<DigestSet, Error> {
    let (plain, hex, data, warning) = match input {
        HashInput::Plain(text) => (
            text.to_string(),
            as_hex(text.as_bytes()),
            text.as_bytes().to_vec(),
            None,
        ),
        HashInput::Hex(hex) => {
            let data = from_hex(hex).map_err(|_| Error::InvalidHexForHashing)?;
            let warning = (!is_displayable(&data)).then_some(Warning::Mojibake);
            (
                String::from_utf8_lossy(&data).into_owned(),
                hex.to_string(),
                data,
                warning,
            )
        }
    };

    trace!("hashing {} bytes", data.len());

    Ok(DigestSet {
        plain,
        hex,
        digests: Digests::compute(&data),
        warning,
    })
}

/// Valid UTF-8 without replacement characters or control characters other than
/// tab, line feed and carriage return.
fn is_displayable(data: &[u8]) -> bool {
    match std::str::from_utf8(data) {
        Ok(text) => !text.chars().any(|c| {
            c == char::REPLACEMENT_CHARACTER || (c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
        }),
        Err(_) => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashUpdate {
    pub set: DigestSet,
    pub error: Option<Error>,
}

impl HashUpdate {
    /// The one line the form shows under the fields: the error, else the warning.
    pub fn message(&self) -> Option<String> {
        match (&self.error, &self.set.warning) {
            (Some(e), _) => Some(e.to_string()),
            (None, Some(w)) => Some(w.to_string()),
            (None, None) => None,
        }
    }
}

/// Owns the hash form's state. Editing the text fills the hex field and vice versa.
#[derive(Debug, Default)]
pub struct HashEngine {
    current: DigestSet,
    error: Option<Error>,
}

impl HashEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, input: HashInput<'_>) -> HashUpdate {
        if input.raw().is_empty() {
            debug!("hash input cleared; resetting");
            self.current = DigestSet::default();
            self.error = None;
            return self.snapshot();
        }

        match compute_digests(input) {
            Ok(set) => {
                if let Some(warning) = set.warning {
                    debug!("{warning}: {}", set.hex);
                }
                self.current = set;
                self.error = None;
            }
            Err(e) => {
                debug!("hash input rejected: {e}");
                self.current.hex = input.raw().to_string();
                self.error = Some(e);
            }
        }

        self.snapshot()
    }

    pub fn current(&self) -> &DigestSet {
        &self.current
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn snapshot(&self) -> HashUpdate {
        HashUpdate {
            set: self.current.clone(),
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_test_digests(digests: &Digests) {
        let md5 = digests.get(Algorithm::Md5);
        assert_eq!(md5.hex, "098f6bcd4621d373cade4e832627b4f6");

        let sha1 = digests.get(Algorithm::Sha1);
        assert_eq!(sha1.hex, "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3");
        assert_eq!(sha1.base64, "qUqP5cyxm6YcTAhz05Hph5gvu9M=");
        assert_eq!(sha1.base64url, "qUqP5cyxm6YcTAhz05Hph5gvu9M");

        let sha256 = digests.get(Algorithm::Sha256);
        assert_eq!(
            sha256.hex,
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
        assert_eq!(sha256.base64, "n4bQgYhMfWWaL+qgxVrQFaO/TxsrC4Is0V1sFbDwCgg=");
        assert_eq!(sha256.base64url, "n4bQgYhMfWWaL-qgxVrQFaO_TxsrC4Is0V1sFbDwCgg");

        let sha512 = digests.get(Algorithm::Sha512);
        assert_eq!(
            sha512.hex,
            "ee26b0dd4af7e749aa1a8ee3c10ae9923f618980772e473f8819a5d4940e0db2\
             7ac185f8a0e1d5f84f88bc887fd67b143732c304cc5fa9ad8e6f57f50028a8ff"
        );
        assert_eq!(
            sha512.base64,
            "7iaw3Ur350mqGo7jwQrpkj9hiYB3Lkc/iBml1JQODbJ6wYX4oOHV+E+IvIh/1nsUNzLDBMxfqa2Ob1f1ACio/w=="
        );
        assert_eq!(
            sha512.base64url,
            "7iaw3Ur350mqGo7jwQrpkj9hiYB3Lkc_iBml1JQODbJ6wYX4oOHV-E-IvIh_1nsUNzLDBMxfqa2Ob1f1ACio_w"
        );
    }

    #[test]
    fn digests_of_plain_text() {
        let set = compute_digests(HashInput::Plain("test")).unwrap();
        assert_eq!(set.plain, "test");
        assert_eq!(set.hex, "74657374");
        assert_eq!(set.warning, None);
        assert_test_digests(&set.digests);
    }

    #[test]
    fn hex_input_hashes_the_same_bytes() {
        let set = compute_digests(HashInput::Hex("74657374")).unwrap();
        assert_eq!(set.plain, "test");
        assert_eq!(set.warning, None);
        assert_test_digests(&set.digests);
    }

    #[test]
    fn zero_byte_hashes_with_advisory() {
        let set = compute_digests(HashInput::Hex("00")).unwrap();
        assert_eq!(set.warning, Some(Warning::Mojibake));
        assert_eq!(
            set.digests.get(Algorithm::Sha256).hex,
            "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d"
        );
    }

    #[test]
    fn replacement_character_hashes_with_advisory() {
        let set = compute_digests(HashInput::Hex("efbfbd")).unwrap();
        assert_eq!(set.plain, "\u{fffd}");
        assert_eq!(set.warning, Some(Warning::Mojibake));
        assert!(!set.digests.is_empty());
    }

    #[test]
    fn invalid_utf8_hashes_literal_bytes() {
        let set = compute_digests(HashInput::Hex("ff")).unwrap();
        assert_eq!(set.plain, "\u{fffd}");
        assert_eq!(set.warning, Some(Warning::Mojibake));
        assert_eq!(
            set.digests.get(Algorithm::Md5).hex,
            "00594fd4f42ba43fc1ca0427a0576295"
        );
    }

    #[test]
    fn invalid_hex_computes_nothing() {
        assert_eq!(
            compute_digests(HashInput::Hex("\u{fffd}")),
            Err(Error::InvalidHexForHashing)
        );
        assert_eq!(
            compute_digests(HashInput::Hex("abc")),
            Err(Error::InvalidHexForHashing)
        );
    }

    #[test]
    fn line_breaks_are_displayable() {
        let set = compute_digests(HashInput::Hex("610d0a62")).unwrap();
        assert_eq!(set.warning, None);
    }

    #[test]
    fn engine_reset_and_error() {
        let mut engine = HashEngine::new();
        engine.update(HashInput::Plain("test"));

        let update = engine.update(HashInput::Hex("zz"));
        assert_eq!(
            update.message().as_deref(),
            Some("not a hex value that can be rendered as text")
        );
        assert_eq!(update.set.plain, "test");
        assert_eq!(update.set.hex, "zz");
        assert_test_digests(&update.set.digests);

        let update = engine.update(HashInput::Plain(""));
        assert_eq!(update.set, DigestSet::default());
        assert!(update.set.digests.is_empty());
        assert_eq!(update.message(), None);
    }

    #[test]
    fn engine_reports_advisory_as_message() {
        let mut engine = HashEngine::new();
        let update = engine.update(HashInput::Hex("00"));
        assert_eq!(update.error, None);
        assert_eq!(
            update.message().as_deref(),
            Some("the value shown as text may be garbled (mojibake)")
        );
    }

    #[test]
    fn serializes_digests_by_algorithm() {
        let set = compute_digests(HashInput::Plain("test")).unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(
            json["digests"]["md5"]["hex"],
            "098f6bcd4621d373cade4e832627b4f6"
        );
        assert_eq!(json["warning"], serde_json::Value::Null);
    }
}
