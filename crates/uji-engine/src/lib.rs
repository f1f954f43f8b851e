//! Engines behind the developer tools page.
//!
//! Each engine owns the state of one form and turns a single edit into a complete
//! next-state snapshot that a UI layer can bind to:
//!
//! - [`ConversionEngine`] keeps the encoder fields of [`EncodingSet`] consistent.
//! - [`NumeralEngine`] keeps one integer consistent across five bases.
//! - [`HashEngine`] computes MD5 and SHA digests of text or hex input.
//! - [`RandomGenerator`] produces random strings from an alphabet.

#![forbid(unsafe_code)]

pub mod conversion;
pub mod error;
pub mod field;
pub mod hash;
pub mod numeral;
pub mod random;

pub use conversion::{ConversionEngine, EncodingSet, Update};
pub use error::Error;
pub use field::Field;
pub use hash::{
    Algorithm, Digest, DigestSet, Digests, HashEngine, HashInput, HashUpdate, Warning,
    compute_digests,
};
pub use numeral::{NumeralEngine, NumeralSet, NumeralUpdate};
pub use random::{DEFAULT_ALPHABET, RandomGenerator};
pub use uji_codec::NumeralBase;
