use std::fmt;

use thiserror::Error;

use crate::entropy::EntropyError;

/// The pipeline step an [`IssuanceError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Generation,
    KeyEncoding,
    RequestBuilding,
    RequestEncoding,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Generation => "generation",
            Stage::KeyEncoding => "key-encoding",
            Stage::RequestBuilding => "request-building",
            Stage::RequestEncoding => "request-encoding",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Entropy source failed: {0}")]
    Entropy(#[from] EntropyError),

    #[error("RSA key generation failed: {0}")]
    Rsa(#[from] rsa::Error),
}

/// DER or PEM marshalling failed.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("DER encoding failed: {0}")]
    Der(#[from] der::Error),

    #[error("PKCS#1 encoding failed: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),

    #[error("Public key encoding failed: {0}")]
    Spki(#[from] rsa::pkcs8::spki::Error),

    #[error("PEM encoding failed: {0}")]
    Pem(#[from] pem_rfc7468::Error),
}

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("Entropy source failed: {0}")]
    Entropy(#[from] EntropyError),

    #[error("Signature computation failed: {0}")]
    Signature(#[from] rsa::signature::Error),

    #[error("Signature algorithm identifier unavailable: {0}")]
    Algorithm(#[from] rsa::pkcs8::spki::Error),
}

/// Failure to build the signed certificate request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Signing(#[from] SigningError),
}

impl From<der::Error> for RequestError {
    fn from(err: der::Error) -> Self {
        Self::Encoding(err.into())
    }
}

/// Returned by [`IssuanceService::issue`](crate::IssuanceService::issue).
/// Each variant corresponds to one [`Stage`]; no partial output accompanies
/// an error.
#[derive(Debug, Error)]
pub enum IssuanceError {
    #[error("Key generation failed: {0}")]
    Generation(#[source] GenerationError),

    #[error("Private key encoding failed: {0}")]
    KeyEncoding(#[source] EncodingError),

    #[error("Certificate request construction failed: {0}")]
    RequestBuilding(#[source] RequestError),

    #[error("Certificate request encoding failed: {0}")]
    RequestEncoding(#[source] EncodingError),
}

impl IssuanceError {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Generation(_) => Stage::Generation,
            Self::KeyEncoding(_) => Stage::KeyEncoding,
            Self::RequestBuilding(_) => Stage::RequestBuilding,
            Self::RequestEncoding(_) => Stage::RequestEncoding,
        }
    }

    /// Whether the failure was caused by subject content the ASN.1 layer
    /// could not represent, as opposed to a broken key or entropy source.
    pub fn is_invalid_subject(&self) -> bool {
        matches!(self, Self::RequestBuilding(RequestError::Encoding(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_tags() {
        let err = IssuanceError::Generation(GenerationError::Entropy(EntropyError::new("gone")));
        assert_eq!(err.stage(), Stage::Generation);
        assert!(!err.is_invalid_subject());

        let err = IssuanceError::RequestBuilding(RequestError::Signing(SigningError::Entropy(
            EntropyError::new("gone"),
        )));
        assert_eq!(err.stage(), Stage::RequestBuilding);
        assert!(!err.is_invalid_subject());
    }

    #[test]
    fn test_invalid_subject_classification() {
        let der_err = der::Error::from(der::ErrorKind::Overflow);
        let err = IssuanceError::RequestBuilding(RequestError::from(der_err));

        assert_eq!(err.stage(), Stage::RequestBuilding);
        assert!(err.is_invalid_subject());
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Generation.to_string(), "generation");
        assert_eq!(Stage::KeyEncoding.to_string(), "key-encoding");
        assert_eq!(Stage::RequestBuilding.to_string(), "request-building");
        assert_eq!(Stage::RequestEncoding.to_string(), "request-encoding");
    }

    #[test]
    fn test_message_names_the_cause() {
        let err = IssuanceError::Generation(GenerationError::Entropy(EntropyError::new(
            "device unplugged",
        )));
        let message = err.to_string();

        assert!(message.starts_with("Key generation failed"));
        assert!(message.contains("device unplugged"));
    }
}
