//! The base converter form: one non-negative integer written in five bases.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;
use uji_codec::{NumeralBase, convert_base};

use crate::error::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumeralSet {
    values: [String; NumeralBase::ALL.len()],
}

impl NumeralSet {
    /// Write the integer `digits` (in `source`) in every base. `source` keeps `digits`
    /// as typed, the others are canonical.
    pub fn from_digits(source: NumeralBase, digits: &str) -> Result<Self, Error> {
        let mut set = NumeralSet::default();

        for (i, base) in NumeralBase::ALL.into_iter().enumerate() {
            set.values[i] = if base == source {
                // still validates the edited field's digits
                convert_base(digits, source, source)?;
                digits.to_string()
            } else {
                convert_base(digits, source, base)?
            };
        }

        Ok(set)
    }

    pub fn get(&self, base: NumeralBase) -> &str {
        &self.values[position(base)]
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NumeralBase, &str)> {
        NumeralBase::ALL.into_iter().map(|base| (base, self.get(base)))
    }

    fn set(&mut self, base: NumeralBase, value: &str) {
        self.values[position(base)] = value.to_string();
    }
}

/// `NumeralBase::ALL` is in declaration order.
fn position(base: NumeralBase) -> usize {
    base as usize
}

impl Serialize for NumeralSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (base, value) in self.iter() {
            map.serialize_entry(base.name(), value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumeralUpdate {
    pub numbers: NumeralSet,
    pub error: Option<Error>,
}

/// Owns the base converter's state, with the same reset and error rules as
/// [`crate::ConversionEngine`].
#[derive(Debug, Default)]
pub struct NumeralEngine {
    current: NumeralSet,
    error: Option<Error>,
}

impl NumeralEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_from_base(&mut self, base: NumeralBase, raw: &str) -> NumeralUpdate {
        if raw.is_empty() {
            debug!("{base} cleared; resetting all bases");
            self.current = NumeralSet::default();
            self.error = None;
            return self.snapshot();
        }

        match NumeralSet::from_digits(base, raw) {
            Ok(set) => {
                self.current = set;
                self.error = None;
            }
            Err(e) => {
                debug!("{base} rejected: {e}");
                self.current.set(base, raw);
                self.error = Some(e);
            }
        }

        self.snapshot()
    }

    pub fn numbers(&self) -> &NumeralSet {
        &self.current
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn snapshot(&self) -> NumeralUpdate {
        NumeralUpdate {
            numbers: self.current.clone(),
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use NumeralBase::*;

    use super::*;

    const TEN: [(NumeralBase, &str); 5] = [
        (Binary, "1010"),
        (Quaternary, "22"),
        (Octal, "12"),
        (Decimal, "10"),
        (Hexadecimal, "a"),
    ];

    #[test]
    fn ten_from_every_direction() {
        for (source, digits) in TEN {
            let mut engine = NumeralEngine::new();
            let update = engine.update_from_base(source, digits);

            assert_eq!(update.error, None);
            for (base, expected) in TEN {
                assert_eq!(update.numbers.get(base), expected, "{source} -> {base}");
            }
        }
    }

    #[test]
    fn invalid_digit_names_the_base_and_keeps_the_rest() {
        let mut engine = NumeralEngine::new();
        engine.update_from_base(Decimal, "10");

        let update = engine.update_from_base(Binary, "102");

        assert_eq!(
            update.error.as_ref().map(ToString::to_string).as_deref(),
            Some("not a valid binary (base 2) value")
        );
        assert_eq!(update.numbers.get(Binary), "102");
        assert_eq!(update.numbers.get(Quaternary), "22");
        assert_eq!(update.numbers.get(Octal), "12");
        assert_eq!(update.numbers.get(Decimal), "10");
        assert_eq!(update.numbers.get(Hexadecimal), "a");
    }

    #[test]
    fn each_base_reports_itself() {
        let bad = [
            (Binary, "2"),
            (Quaternary, "4"),
            (Octal, "8"),
            (Decimal, "a"),
            (Hexadecimal, "g"),
        ];

        for (base, digits) in bad {
            let mut engine = NumeralEngine::new();
            let update = engine.update_from_base(base, digits);
            assert_eq!(
                update.error,
                Some(Error::Codec(uji_codec::Error::InvalidNumeralDigit { base }))
            );
        }
    }

    #[test]
    fn empty_input_resets() {
        for base in NumeralBase::ALL {
            let mut engine = NumeralEngine::new();
            engine.update_from_base(Hexadecimal, "ff");
            engine.update_from_base(Octal, "9");
            assert!(engine.error().is_some());

            let update = engine.update_from_base(base, "");
            assert!(update.numbers.is_empty(), "clearing {base}");
            assert_eq!(update.error, None, "clearing {base}");
        }
    }

    #[test]
    fn large_values_stay_consistent() {
        let mut engine = NumeralEngine::new();
        let update = engine.update_from_base(Hexadecimal, "ffffffffffffffffffffffffffffffff");

        assert_eq!(update.numbers.get(Binary), "1".repeat(128));
        assert_eq!(
            update.numbers.get(Decimal),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn serializes_by_base_name() {
        let mut engine = NumeralEngine::new();
        let json = serde_json::to_value(engine.update_from_base(Decimal, "10")).unwrap();
        assert_eq!(json["numbers"]["quaternary"], "22");
        assert_eq!(json["error"], serde_json::Value::Null);
    }
}
