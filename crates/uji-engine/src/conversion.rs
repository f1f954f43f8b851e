//! The encoder form: several representations of one byte sequence kept mutually
//! consistent while the user edits any one of them.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::Error;
use crate::field::Field;

/// The value of every [`Field`], plus which field the last edit came from.
///
/// After a successful edit every field other than the edited one is derived from the
/// edited field's bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingSet {
    values: [String; Field::COUNT],
    last_edited: Option<Field>,
}

impl EncodingSet {
    /// Derive every field from `data`, keeping `source`'s text exactly as typed.
    pub fn from_bytes(source: Field, raw: &str, data: &[u8]) -> Self {
        let mut set = EncodingSet {
            last_edited: Some(source),
            ..EncodingSet::default()
        };

        for field in Field::ALL {
            set.values[field.index()] = if field == source {
                raw.to_string()
            } else {
                field.codec().encode(data)
            };
        }

        set
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn last_edited(&self) -> Option<Field> {
        self.last_edited
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(|field| (field, self.get(field)))
    }

    fn set(&mut self, field: Field, value: &str) {
        self.values[field.index()] = value.to_string();
        self.last_edited = Some(field);
    }
}

impl Serialize for EncodingSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT + 1))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.name(), value)?;
        }
        map.serialize_entry("last_edited", &self.last_edited)?;
        map.end()
    }
}

/// Snapshot of the form after one edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Update {
    pub fields: EncodingSet,
    pub error: Option<Error>,
}

/// Owns the encoder form's state. Edits are applied one at a time; the last one wins.
#[derive(Debug, Default)]
pub struct ConversionEngine {
    current: EncodingSet,
    error: Option<Error>,
}

impl ConversionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the edit of `field` to `raw` and return the resulting state.
    ///
    /// - Empty `raw` clears every field and the error.
    /// - If `raw` decodes, every other field is re-encoded from its bytes and the
    ///   error clears.
    /// - Otherwise only the edited field takes `raw`; the other fields keep their
    ///   last valid values and the error describes why decoding failed.
    pub fn update_from_field(&mut self, field: Field, raw: &str) -> Update {
        if raw.is_empty() {
            debug!("{field} cleared; resetting all fields");
            self.current = EncodingSet::default();
            self.error = None;
            return self.snapshot();
        }

        match field.codec().decode(raw) {
            Ok(data) => {
                trace!("{field} decoded to {} bytes", data.len());
                self.current = EncodingSet::from_bytes(field, raw, &data);
                self.error = None;
            }
            Err(e) => {
                debug!("{field} rejected: {e}");
                self.current.set(field, raw);
                self.error = Some(e.into());
            }
        }

        self.snapshot()
    }

    /// Convenience for [`Self::update_from_field`] with a field given by name.
    pub fn update_from_name(&mut self, name: &str, raw: &str) -> Result<Update, Error> {
        let field = name.parse::<Field>()?;
        Ok(self.update_from_field(field, raw))
    }

    pub fn fields(&self) -> &EncodingSet {
        &self.current
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn snapshot(&self) -> Update {
        Update {
            fields: self.current.clone(),
            error: self.error.clone(),
        }
    }
}
