use std::{fmt, sync::Arc, time::Instant};

use keysmith_common::{params::SubjectSpec, views::Artifact};
use tracing::{debug, info};

use crate::{
    entropy::{EntropySource, OsEntropy},
    error::IssuanceError,
    keypair, pem, request,
};

#[cfg(test)]
mod tests;

/// The two artifacts of a successful issuance.
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedKeys {
    pub private_key: Artifact,
    pub csr: Artifact,
}

// Names only; the key body must never reach a log line.
impl fmt::Debug for IssuedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedKeys")
            .field("private_key", &self.private_key.name)
            .field("csr", &self.csr.name)
            .finish()
    }
}

impl IssuedKeys {
    /// The artifacts in delivery order: private key first, then the request.
    pub fn into_artifacts(self) -> [Artifact; 2] {
        [self.private_key, self.csr]
    }
}

/// Issues RSA private keys and matching certificate signing requests.
///
/// Holds nothing but the entropy source, so clones are cheap and calls on
/// the same instance are independent of each other.
#[derive(Clone)]
pub struct IssuanceService {
    entropy: Arc<dyn EntropySource>,
}

impl IssuanceService {
    pub fn new(entropy: Arc<dyn EntropySource>) -> Self {
        Self { entropy }
    }

    /// Generate a keypair for `subject` and a CSR signed by it.
    ///
    /// CPU-bound: RSA-2048 generation takes tens to hundreds of milliseconds.
    /// Async callers should run this on a blocking thread.
    ///
    /// # Errors
    ///
    /// Returns the first failure, tagged with its [`Stage`](crate::Stage).
    /// Subject content is not validated; values the DER layer cannot
    /// represent fail at [`Stage::RequestBuilding`](crate::Stage).
    #[tracing::instrument(skip_all, fields(common_name = %subject.common_name))]
    pub fn issue(&self, subject: &SubjectSpec) -> Result<IssuedKeys, IssuanceError> {
        let started = Instant::now();

        let keypair =
            keypair::generate(self.entropy.as_ref()).map_err(IssuanceError::Generation)?;
        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "keypair generated");

        let private_key = pem::encode_private_key(&keypair).map_err(IssuanceError::KeyEncoding)?;

        let request_der = request::build(subject, &keypair, self.entropy.as_ref())
            .map_err(IssuanceError::RequestBuilding)?;
        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "request signed");

        let csr = pem::encode_request(&request_der).map_err(IssuanceError::RequestEncoding)?;

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "issued private key and certificate request"
        );

        Ok(IssuedKeys {
            private_key: Artifact {
                name: format!("{}.key", subject.common_name),
                data: private_key,
            },
            csr: Artifact {
                name: format!("{}.csr", subject.common_name),
                data: csr,
            },
        })
    }
}

impl Default for IssuanceService {
    fn default() -> Self {
        Self::new(Arc::new(OsEntropy))
    }
}

impl fmt::Debug for IssuanceService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuanceService").finish_non_exhaustive()
    }
}
