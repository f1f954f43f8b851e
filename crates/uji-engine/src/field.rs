//! The encoder form's fields and the codec behind each one.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use uji_codec::{Base64, Hex, NumeralBase, Percent, Plain, Radix, TextCodec, UnicodeEscape};

use crate::error::Error;

/// One representation shown in the encoder form.
///
/// `Hex` is the strict byte-wise hex field; `HexNumeral` is the hexadecimal member of
/// the numeral-system group, rendered with the same per-byte grouping as binary,
/// quaternary, octal and decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Plain,
    Hex,
    Base64,
    #[serde(rename = "base64url")]
    Base64Url,
    PercentEncoded,
    UnicodeEscaped,
    Binary,
    Quaternary,
    Octal,
    Decimal,
    HexNumeral,
}

/// Indexed by `Field as usize`; order must follow `Field::ALL`.
static CODECS: [&dyn TextCodec; Field::COUNT] = [
    &Plain,
    &Hex,
    &Base64::Standard,
    &Base64::UrlSafe,
    &Percent,
    &UnicodeEscape,
    &Radix(NumeralBase::Binary),
    &Radix(NumeralBase::Quaternary),
    &Radix(NumeralBase::Octal),
    &Radix(NumeralBase::Decimal),
    &Radix(NumeralBase::Hexadecimal),
];

/// Names accepted in addition to the canonical ones; these are the input ids of the
/// original web form.
const ALIASES: &[(&str, Field)] = &[
    ("plane", Field::Plain),
    ("b64str", Field::Base64),
    ("b64urlstr", Field::Base64Url),
    ("urlencode", Field::PercentEncoded),
    ("unicode", Field::UnicodeEscaped),
    ("bin", Field::Binary),
    ("quat", Field::Quaternary),
    ("oct", Field::Octal),
    ("dec", Field::Decimal),
];

impl Field {
    pub const COUNT: usize = 11;

    pub const ALL: [Field; Field::COUNT] = [
        Field::Plain,
        Field::Hex,
        Field::Base64,
        Field::Base64Url,
        Field::PercentEncoded,
        Field::UnicodeEscaped,
        Field::Binary,
        Field::Quaternary,
        Field::Octal,
        Field::Decimal,
        Field::HexNumeral,
    ];

    pub fn codec(self) -> &'static dyn TextCodec {
        CODECS[self.index()]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Field::Plain => "plain",
            Field::Hex => "hex",
            Field::Base64 => "base64",
            Field::Base64Url => "base64url",
            Field::PercentEncoded => "percent_encoded",
            Field::UnicodeEscaped => "unicode_escaped",
            Field::Binary => "binary",
            Field::Quaternary => "quaternary",
            Field::Octal => "octal",
            Field::Decimal => "decimal",
            Field::HexNumeral => "hex_numeral",
        }
    }

    /// The numeral base of the numeral-system fields.
    pub const fn numeral_base(self) -> Option<NumeralBase> {
        match self {
            Field::Binary => Some(NumeralBase::Binary),
            Field::Quaternary => Some(NumeralBase::Quaternary),
            Field::Octal => Some(NumeralBase::Octal),
            Field::Decimal => Some(NumeralBase::Decimal),
            Field::HexNumeral => Some(NumeralBase::Hexadecimal),
            _ => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();

        Field::ALL
            .into_iter()
            .map(|field| (field.name(), field))
            .chain(ALIASES.iter().copied())
            .find(|(name, _)| *name == wanted)
            .map(|(_, field)| field)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}
