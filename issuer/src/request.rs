//! PKCS#10 certificate signing request construction.
//!
//! The subject is a six-RDN distinguished name in the order C, ST, L, O, OU,
//! CN. Every attribute is present even when its value is empty. Values that
//! fit the PrintableString repertoire are encoded as PrintableString and all
//! others as UTF8String.

use const_oid::{ObjectIdentifier, db::rfc4519};
use der::{
    Any, Decode, Encode,
    asn1::{BitString, PrintableStringRef, SetOfVec, Utf8StringRef},
};
use keysmith_common::params::SubjectSpec;
use rsa::{
    pkcs1v15::{Signature, SigningKey},
    pkcs8::EncodePublicKey,
    signature::{RandomizedSigner, SignatureEncoding},
};
use sha2::Sha256;
use x509_cert::{
    attr::AttributeTypeAndValue,
    name::{Name, RdnSequence, RelativeDistinguishedName},
    request::{CertReq, CertReqInfo, Version},
    spki::{DynSignatureAlgorithmIdentifier, SubjectPublicKeyInfoOwned},
};

use crate::{
    entropy::{EntropySource, seeded_rng},
    error::{EncodingError, RequestError, SigningError},
    keypair::Keypair,
};

/// Build, self-sign and DER-encode a certificate signing request for
/// `subject` carrying the public half of `keypair`.
///
/// The signature is sha256WithRSAEncryption. RSA blinding randomness is
/// seeded from `entropy`.
#[tracing::instrument(skip_all)]
pub fn build(
    subject: &SubjectSpec,
    keypair: &Keypair,
    entropy: &dyn EntropySource,
) -> Result<Vec<u8>, RequestError> {
    let raw_subject = encode_subject(subject)?;

    let info = CertReqInfo {
        version: Version::V1,
        subject: Name::from_der(&raw_subject)?,
        public_key: subject_public_key_info(keypair)?,
        attributes: Default::default(),
    };
    let info_der = info.to_der()?;

    let signing_key = SigningKey::<Sha256>::new(keypair.private_key().clone());
    let algorithm = signing_key
        .signature_algorithm_identifier()
        .map_err(SigningError::Algorithm)?;

    let mut rng = seeded_rng(entropy).map_err(SigningError::Entropy)?;
    let signature: Signature = signing_key
        .try_sign_with_rng(&mut rng, &info_der)
        .map_err(SigningError::Signature)?;

    let request = CertReq {
        info,
        algorithm,
        signature: BitString::from_bytes(&signature.to_bytes())?,
    };

    Ok(request.to_der()?)
}

/// DER encoding of the distinguished name for `subject`.
pub fn encode_subject(subject: &SubjectSpec) -> Result<Vec<u8>, EncodingError> {
    Ok(distinguished_name(subject)?.to_der()?)
}

pub fn distinguished_name(subject: &SubjectSpec) -> Result<Name, EncodingError> {
    let attributes = [
        (rfc4519::C, &subject.country),
        (rfc4519::ST, &subject.state),
        (rfc4519::L, &subject.locality),
        (rfc4519::O, &subject.organization_name),
        (rfc4519::OU, &subject.organizational_unit_name),
        (rfc4519::CN, &subject.common_name),
    ];

    let rdns = attributes
        .into_iter()
        .map(|(oid, value)| single_valued_rdn(oid, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RdnSequence(rdns))
}

fn single_valued_rdn(
    oid: ObjectIdentifier,
    value: &str,
) -> Result<RelativeDistinguishedName, der::Error> {
    let atv = AttributeTypeAndValue {
        oid,
        value: attribute_value(value)?,
    };

    Ok(RelativeDistinguishedName(SetOfVec::try_from(vec![atv])?))
}

fn attribute_value(value: &str) -> Result<Any, der::Error> {
    if value.chars().all(is_printable) {
        Any::encode_from(&PrintableStringRef::new(value)?)
    } else {
        Any::encode_from(&Utf8StringRef::new(value)?)
    }
}

/// Membership in the X.680 PrintableString character set.
fn is_printable(c: char) -> bool {
    matches!(
        c,
        'A'..='Z'
            | 'a'..='z'
            | '0'..='9'
            | ' '
            | '\''
            | '('
            | ')'
            | '+'
            | ','
            | '-'
            | '.'
            | '/'
            | ':'
            | '='
            | '?'
    )
}

fn subject_public_key_info(keypair: &Keypair) -> Result<SubjectPublicKeyInfoOwned, EncodingError> {
    let der = keypair.public_key().to_public_key_der()?;
    Ok(SubjectPublicKeyInfoOwned::from_der(der.as_bytes())?)
}
