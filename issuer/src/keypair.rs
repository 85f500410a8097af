use std::fmt;

use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};

use crate::{
    entropy::{EntropySource, seeded_rng},
    error::GenerationError,
};

/// Modulus size of every issued key.
pub const RSA_KEY_BITS: usize = 2048;

const RSA_PUBLIC_EXPONENT: u64 = 65537;

/// An RSA keypair owned by a single issuance.
///
/// `Debug` never prints key material.
pub struct Keypair {
    private: RsaPrivateKey,
}

impl Keypair {
    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> RsaPublicKey {
        self.private.to_public_key()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("bits", &RSA_KEY_BITS)
            .finish_non_exhaustive()
    }
}

impl From<RsaPrivateKey> for Keypair {
    fn from(private: RsaPrivateKey) -> Self {
        Self { private }
    }
}

/// Generate a fresh RSA-2048 keypair.
#[tracing::instrument(skip_all)]
pub fn generate(entropy: &dyn EntropySource) -> Result<Keypair, GenerationError> {
    let mut rng = seeded_rng(entropy)?;

    let private = RsaPrivateKey::new_with_exp(
        &mut rng,
        RSA_KEY_BITS,
        &BigUint::from(RSA_PUBLIC_EXPONENT),
    )?;

    Ok(Keypair { private })
}
