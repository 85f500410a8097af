use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use keysmith_common::{params::SubjectSpec, views::ApiErrorResponse};
use serde::Deserialize;

use crate::{context::ApiContext, error::ApiError, templates};

/// Subject fields as named by the HTML form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubjectForm {
    #[serde(rename = "CommonName")]
    pub common_name: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Province")]
    pub province: String,
    #[serde(rename = "Locality")]
    pub locality: String,
    #[serde(rename = "Organization")]
    pub organization: String,
    #[serde(rename = "OrganizationalUnit")]
    pub organizational_unit: String,
}

impl From<SubjectForm> for SubjectSpec {
    fn from(form: SubjectForm) -> Self {
        SubjectSpec {
            common_name: form.common_name,
            country: form.country,
            state: form.province,
            locality: form.locality,
            organization_name: form.organization,
            organizational_unit_name: form.organizational_unit,
        }
    }
}

/// An [`ApiError`] rendered as an HTML page instead of JSON.
pub struct HtmlError(ApiError);

impl From<ApiError> for HtmlError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        tracing::error!("Error returned by form handler: {}", self.0);

        let status_code = self.0.status_code();
        let body = ApiErrorResponse::from(self.0);
        (status_code, Html(templates::render_error(&body).into_string())).into_response()
    }
}

pub async fn index() -> Html<String> {
    Html(templates::render_index().into_string())
}

pub async fn result(
    State(ctx): State<ApiContext>,
    form: Result<Form<SubjectForm>, FormRejection>,
) -> Result<(StatusCode, Html<String>), HtmlError> {
    let Form(form) = form.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let issued = super::run_issuance(&ctx, form.into()).await?;

    Ok((
        StatusCode::CREATED,
        Html(templates::render_result(&issued.into_artifacts()).into_string()),
    ))
}
