//! Positional numeral systems.
//!
//! Two views are offered. [`Radix`] renders a byte sequence as fixed-width, zero-padded
//! digit groups (one group per byte), which is what the encoder form shows next to the
//! other byte representations. [`convert_base`] converts one arbitrarily large
//! non-negative integer between bases.

use std::fmt::{Display, Formatter};

use num_bigint::BigUint;

use crate::codec::TextCodec;
use crate::error::Error;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumeralBase {
    Binary,
    Quaternary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl NumeralBase {
    pub const ALL: [NumeralBase; 5] = [
        NumeralBase::Binary,
        NumeralBase::Quaternary,
        NumeralBase::Octal,
        NumeralBase::Decimal,
        NumeralBase::Hexadecimal,
    ];

    pub const fn radix(self) -> u32 {
        match self {
            NumeralBase::Binary => 2,
            NumeralBase::Quaternary => 4,
            NumeralBase::Octal => 8,
            NumeralBase::Decimal => 10,
            NumeralBase::Hexadecimal => 16,
        }
    }

    /// Digits needed to write any byte value in this base.
    pub const fn byte_width(self) -> usize {
        match self {
            NumeralBase::Binary => 8,
            NumeralBase::Quaternary => 4,
            NumeralBase::Octal => 3,
            NumeralBase::Decimal => 3,
            NumeralBase::Hexadecimal => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            NumeralBase::Binary => "binary",
            NumeralBase::Quaternary => "quaternary",
            NumeralBase::Octal => "octal",
            NumeralBase::Decimal => "decimal",
            NumeralBase::Hexadecimal => "hexadecimal",
        }
    }

    fn digit_value(self, symbol: u8) -> Option<u32> {
        char::from(symbol).to_digit(self.radix())
    }

    fn parse_digits(self, text: &str) -> Result<Vec<u32>, Error> {
        text.bytes()
            .map(|b| self.digit_value(b))
            .collect::<Option<Vec<_>>>()
            .filter(|digits| !digits.is_empty())
            .ok_or(Error::InvalidNumeralDigit { base: self })
    }
}

impl TryFrom<u32> for NumeralBase {
    type Error = Error;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        NumeralBase::ALL
            .into_iter()
            .find(|base| base.radix() == radix)
            .ok_or(Error::UnsupportedBase(radix))
    }
}

impl Display for NumeralBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Bytes as concatenated fixed-width digit groups, e.g. `"t"` is `01110100` in binary
/// and `116` in decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix(pub NumeralBase);

impl TextCodec for Radix {
    fn encode(&self, data: &[u8]) -> String {
        let base = self.0;
        let width = base.byte_width();
        let mut out = String::with_capacity(data.len() * width);
        let mut group = [b'0'; 8];

        for &byte in data {
            let mut value = u32::from(byte);
            for slot in group[..width].iter_mut().rev() {
                *slot = DIGITS[(value % base.radix()) as usize];
                value /= base.radix();
            }
            out.extend(group[..width].iter().map(|&d| char::from(d)));
        }

        out
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        let base = self.0;
        let invalid = Error::InvalidNumeralDigit { base };

        let digits = base.parse_digits(text)?;
        if digits.len() % base.byte_width() != 0 {
            return Err(invalid);
        }

        digits
            .chunks(base.byte_width())
            .map(|group| {
                let value = group.iter().fold(0, |acc, &d| acc * base.radix() + d);
                u8::try_from(value).map_err(|_| invalid.clone())
            })
            .collect()
    }
}

/// Convert the non-negative integer written as `digits` in base `from` to base `to`.
///
/// Numbers of any length are supported. Output is canonical: lowercase, no leading
/// zeros, and zero is `"0"`.
pub fn convert_base(digits: &str, from: NumeralBase, to: NumeralBase) -> Result<String, Error> {
    // BigUint::parse_bytes also takes `_` separators, which are not digits here
    from.parse_digits(digits)?;

    let number = BigUint::parse_bytes(digits.as_bytes(), from.radix())
        .ok_or(Error::InvalidNumeralDigit { base: from })?;

    Ok(number.to_str_radix(to.radix()))
}
