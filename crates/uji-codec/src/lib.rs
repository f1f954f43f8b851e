//! Codecs that move a byte sequence in and out of its textual representations.
//!
//! Every representation implements [`TextCodec`], so callers can treat the set of
//! encodings as data and pick a codec at runtime.

#![forbid(unsafe_code)]

pub mod base64;
pub mod codec;
pub mod error;
pub mod hex;
pub mod percent;
pub mod radix;
pub mod unicode;

pub use base64::Base64;
pub use codec::*;
pub use error::Error;
pub use hex::{Hex, as_hex, from_hex};
pub use percent::Percent;
pub use radix::{NumeralBase, Radix, convert_base};
pub use unicode::UnicodeEscape;
