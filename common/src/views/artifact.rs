use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named, PEM-encoded output of an issuance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct Artifact {
    /// Suggested file name, `<common_name>.key` or `<common_name>.csr`.
    pub name: String,

    /// The PEM document.
    pub data: String,
}

/// Response for the key generation endpoint.
///
/// `response` always holds the private key first and the certificate signing
/// request second.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct IssueKeysResponse {
    pub response: Vec<Artifact>,

    /// Always `true` on success. Kept for clients of the form-based flow
    /// that check it before reading `response`.
    pub status: bool,
}

impl IssueKeysResponse {
    pub fn new(artifacts: impl IntoIterator<Item = Artifact>) -> Self {
        Self {
            response: artifacts.into_iter().collect(),
            status: true,
        }
    }
}
