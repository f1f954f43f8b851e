use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] uji_codec::Error),

    #[error("not a hex value that can be rendered as text")]
    InvalidHexForHashing,

    #[error("random string length must be at least 1: {0}")]
    InvalidLength(usize),

    #[error("unknown field '{0}'")]
    UnknownField(String),
}

/// Snapshots carry errors as their display message.
impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
