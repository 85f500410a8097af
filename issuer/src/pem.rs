//! PEM rendering of issued artifacts.

use pem_rfc7468::LineEnding;
use rsa::pkcs1::EncodeRsaPrivateKey;

use crate::{error::EncodingError, keypair::Keypair};

/// Label of the PKCS#1 private key document, as written by classic OpenSSL.
pub const PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";

pub const REQUEST_LABEL: &str = "CERTIFICATE REQUEST";

/// Render the private half of `keypair` as a PKCS#1 `RSA PRIVATE KEY` document.
pub fn encode_private_key(keypair: &Keypair) -> Result<String, EncodingError> {
    let der = keypair.private_key().to_pkcs1_der()?;
    encode(PRIVATE_KEY_LABEL, der.as_bytes())
}

/// Render a DER-encoded PKCS#10 request as a `CERTIFICATE REQUEST` document.
pub fn encode_request(der: &[u8]) -> Result<String, EncodingError> {
    encode(REQUEST_LABEL, der)
}

fn encode(label: &'static str, der: &[u8]) -> Result<String, EncodingError> {
    Ok(pem_rfc7468::encode_string(label, LineEnding::LF, der)?)
}
