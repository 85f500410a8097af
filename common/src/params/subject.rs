use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The identity a keypair and certificate signing request are issued for.
///
/// Every field maps onto exactly one attribute of the request's distinguished
/// name. Fields are carried through verbatim: nothing here is trimmed,
/// validated or normalised, and a missing field is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct SubjectSpec {
    /// Common name (CN), usually the fully qualified domain name the
    /// certificate will be used for. Also used as the file name stem of the
    /// issued artifacts.
    pub common_name: String,

    /// Country (C), conventionally a two-letter ISO 3166 code.
    pub country: String,

    /// State or province (ST).
    pub state: String,

    /// Locality (L), usually a city.
    pub locality: String,

    /// Organization (O).
    pub organization_name: String,

    /// Organizational unit (OU).
    pub organizational_unit_name: String,
}
