use tracing::trace;

use crate::error::Error;

/// Used when no alphabet is given.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Random strings for test data and throwaway identifiers. Not for secrets.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: fastrand::Rng,
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomGenerator {
    pub fn new() -> Self {
        RandomGenerator {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible output for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        RandomGenerator {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// `length` characters drawn independently and uniformly from the distinct
    /// characters of `alphabet`, or of [`DEFAULT_ALPHABET`] when `alphabet` is empty.
    pub fn generate(&mut self, length: usize, alphabet: &str) -> Result<String, Error> {
        if length == 0 {
            return Err(Error::InvalidLength(length));
        }

        let source = if alphabet.is_empty() {
            DEFAULT_ALPHABET
        } else {
            alphabet
        };

        // repeated characters would otherwise be drawn more often
        let mut candidates: Vec<char> = Vec::new();
        for c in source.chars() {
            if !candidates.contains(&c) {
                candidates.push(c);
            }
        }

        trace!("{length} characters from {} candidates", candidates.len());

        Ok((0..length)
            .map(|_| candidates[self.rng.usize(..candidates.len())])
            .collect())
    }
}

/// [`RandomGenerator::generate`] with a freshly seeded generator.
pub fn generate(length: usize, alphabet: &str) -> Result<String, Error> {
    RandomGenerator::new().generate(length, alphabet)
}
