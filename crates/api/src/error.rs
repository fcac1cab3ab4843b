//! Error responses.

use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use topskyll_core::currency::CurrencyError;
use topskyll_shared::AppError;
use tracing::{debug, error};

/// Handler error rendered as `{ "error": code, "message": text }`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<CurrencyError> for ApiError {
    fn from(err: CurrencyError) -> Self {
        Self(err.into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        if rejection.status().is_server_error() {
            Self(AppError::Internal(rejection.body_text()))
        } else {
            Self(AppError::Validation(rejection.body_text()))
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            debug!(error = %self.0, "Request rejected");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use topskyll_shared::CurrencyCode;

    #[tokio::test]
    async fn test_validation_error_response() {
        let xyz = CurrencyCode::parse("XYZ").unwrap();
        let response = ApiError::from(CurrencyError::UnknownCurrency(xyz)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Validation error: Unknown currency: XYZ");
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = ApiError(AppError::NotFound("job".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
