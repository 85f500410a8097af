//! Randomness for key generation and signing.
//!
//! Consumers never read the [`EntropySource`] directly during RSA arithmetic.
//! They draw a [`SEED_LEN`]-byte seed up front and expand it with ChaCha20,
//! so a failing source is reported as an [`EntropyError`] before any work
//! starts.

use rand_chacha::{ChaCha20Rng, rand_core::SeedableRng};
use thiserror::Error;

pub const SEED_LEN: usize = 32;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct EntropyError(String);

impl EntropyError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// A provider of cryptographically secure random bytes.
///
/// Implementations are shared between concurrent issuances and must tolerate
/// simultaneous calls to [`fill`](EntropySource::fill).
pub trait EntropySource: Send + Sync {
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::getrandom(dest)
            .map_err(|e| EntropyError::new(format!("OS random source unavailable: {}", e)))
    }
}

/// Draw a seed from `source` and expand it into a ChaCha20 stream.
pub(crate) fn seeded_rng(source: &dyn EntropySource) -> Result<ChaCha20Rng, EntropyError> {
    let mut seed = [0u8; SEED_LEN];
    source.fill(&mut seed)?;
    Ok(ChaCha20Rng::from_seed(seed))
}
