use std::time::Duration;

use axum::{Json, http::StatusCode, response::IntoResponse};
use keysmith_common::views::ApiErrorResponse;
use keysmith_issuer::IssuanceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Issuance(#[from] IssuanceError),

    #[error("Issuance did not complete within {0:?}")]
    Timeout(Duration),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error(transparent)]
    InternalAnyhow(#[from] anyhow::Error),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Issuance(ie) if ie.is_invalid_subject() => StatusCode::BAD_REQUEST,
            Self::Issuance(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalAnyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(err: ApiError) -> Self {
        ApiErrorResponse {
            code: match &err {
                ApiError::BadRequest(_) => Some("BadRequest".into()),
                ApiError::Issuance(ie) if ie.is_invalid_subject() => Some("InvalidSubject".into()),
                ApiError::Issuance(_) => Some("IssuanceFailed".into()),
                ApiError::Timeout(_) => Some("IssuanceTimeout".into()),
                ApiError::ServiceUnavailable(_) => Some("Unavailable".into()),
                ApiError::InternalAnyhow(_) => Some("InternalError".into()),
            },

            message: match &err {
                ApiError::BadRequest(message) => message.clone(),
                ApiError::Issuance(ie) if ie.is_invalid_subject() => {
                    "The subject contains a value that cannot be encoded in a certificate request."
                        .into()
                }
                ApiError::Issuance(ie) => format!(
                    "Key issuance failed during {}. Please try again later.",
                    ie.stage()
                ),
                ApiError::Timeout(_) => {
                    "Key issuance is taking too long. Please try again later.".into()
                }
                ApiError::ServiceUnavailable(_) => {
                    "The service is not accepting requests right now.".into()
                }
                ApiError::InternalAnyhow(_) => {
                    "Something went wrong on our end. Please try again later.".into()
                }
            },

            #[cfg(debug_assertions)]
            details: Some(err.to_string()),

            #[cfg(not(debug_assertions))]
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Error returned by handler: {self}");

        let status_code = self.status_code();
        (status_code, Json(Into::<ApiErrorResponse>::into(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use keysmith_issuer::{
        Stage,
        entropy::EntropyError,
        error::{GenerationError, RequestError, SigningError},
    };

    use super::*;

    fn generation_failure() -> ApiError {
        IssuanceError::Generation(GenerationError::Entropy(EntropyError::new("dry"))).into()
    }

    #[test]
    fn test_issuance_failure_is_internal() {
        let err = generation_failure();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = ApiErrorResponse::from(err);
        assert_eq!(body.code.as_deref(), Some("IssuanceFailed"));
        assert!(body.message.contains(Stage::Generation.as_str()));
    }

    #[test]
    fn test_signing_failure_is_internal() {
        let err: ApiError = IssuanceError::RequestBuilding(RequestError::Signing(
            SigningError::Entropy(EntropyError::new("dry")),
        ))
        .into();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unencodable_subject_is_bad_request() {
        let overflow = der::Error::from(der::ErrorKind::Overflow);
        let err: ApiError =
            IssuanceError::RequestBuilding(RequestError::Encoding(overflow.into())).into();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiErrorResponse::from(err).code.as_deref(),
            Some("InvalidSubject")
        );
    }

    #[test]
    fn test_timeout_is_unavailable() {
        let err = ApiError::Timeout(Duration::from_secs(30));

        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            ApiErrorResponse::from(err).code.as_deref(),
            Some("IssuanceTimeout")
        );
    }
}
