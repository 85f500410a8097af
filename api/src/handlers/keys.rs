use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use keysmith_common::{params::SubjectSpec, views::IssueKeysResponse};

use crate::{context::ApiContext, error::ApiError};

/// Generate an RSA private key and a certificate signing request for the
/// given subject.
///
/// The response holds the PKCS#1 private key (`<common_name>.key`) followed
/// by the PKCS#10 request (`<common_name>.csr`). Nothing is stored.
#[utoipa::path(
    post,
    path = "/generate",
    tags = ["keys"],
    request_body(content = SubjectSpec, content_type = "application/json"),
    responses(
        (status = 201, description = "Private key and CSR issued", body = IssueKeysResponse),
        (status = 400, description = "Malformed body or unencodable subject"),
    )
)]
pub async fn generate_keys(
    State(ctx): State<ApiContext>,
    body: Result<Json<SubjectSpec>, JsonRejection>,
) -> Result<(StatusCode, Json<IssueKeysResponse>), ApiError> {
    let Json(subject) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let issued = super::run_issuance(&ctx, subject).await?;

    Ok((
        StatusCode::CREATED,
        Json(IssueKeysResponse::new(issued.into_artifacts())),
    ))
}
