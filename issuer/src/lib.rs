//! Keysmith issuance core.
//!
//! Turns a [`SubjectSpec`] into a fresh RSA-2048 private key and a PKCS#10
//! certificate signing request for it, both PEM-encoded.
//!
//! # Pipeline
//!
//! [`IssuanceService::issue`] runs, in order:
//!
//! 1. [`keypair::generate`] - RSA key generation from an [`EntropySource`]
//! 2. [`pem::encode_private_key`] - PKCS#1 `RSA PRIVATE KEY` PEM
//! 3. [`request::build`] - distinguished name, request info and self-signature
//! 4. [`pem::encode_request`] - `CERTIFICATE REQUEST` PEM
//!
//! The first failing step aborts the call with an [`IssuanceError`] tagged by
//! [`Stage`]. Nothing is persisted and no state survives a call.
//!
//! [`SubjectSpec`]: keysmith_common::params::SubjectSpec

pub mod entropy;
pub mod error;
pub mod keypair;
pub mod pem;
pub mod request;
pub mod service;

pub use entropy::{EntropySource, OsEntropy};
pub use error::{IssuanceError, Stage};
pub use service::{IssuanceService, IssuedKeys};
