use thiserror::Error;

use crate::radix::NumeralBase;

/// Reasons a textual representation could not be turned back into bytes.
///
/// The display strings are the messages shown next to the edited field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("not a valid hex string")]
    InvalidHex,

    #[error("Invalid Base64 string")]
    InvalidBase64,

    #[error("cannot URL-decode this value")]
    UndecodableUrl,

    #[error("cannot decode this value as unicode escape sequences")]
    UndecodableUnicode,

    #[error("not a valid {} (base {}) value", .base.name(), .base.radix())]
    InvalidNumeralDigit { base: NumeralBase },

    #[error("unsupported numeral base: {0}")]
    UnsupportedBase(u32),
}
