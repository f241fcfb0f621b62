//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::adjudicator::AdjudicatorError;
use crate::db::DatabaseError;
use crate::export::ExportError;
use crate::pipeline::SubmitError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping. User-facing messages are
/// Polish; internal detail goes to the log only.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Upstream failure: {detail}")]
    Upstream { detail: String },
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail.clone()),
            ApiError::Upstream { detail } => {
                tracing::error!(detail, "Upstream reasoning failure");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM",
                    "Nie udało się przetworzyć żądania".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Wystąpił błąd wewnętrzny".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<SubmitError> for ApiError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::InvalidInput | SubmitError::MissingDecision => {
                ApiError::BadRequest(err.to_string())
            }
            SubmitError::Database(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::MissingCaseId => ApiError::BadRequest(err.to_string()),
            ExportError::NotFound => ApiError::NotFound(err.to_string()),
            ExportError::Template(e) | ExportError::Render(e) => ApiError::Internal(e),
            ExportError::Database(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<AdjudicatorError> for ApiError {
    fn from(err: AdjudicatorError) -> Self {
        ApiError::Upstream {
            detail: err.to_string(),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn bad_request_returns_400_with_message() {
        let response =
            ApiError::BadRequest("Brak lub nieprawidłowe wiadomości.".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert_eq!(json["error"]["message"], "Brak lub nieprawidłowe wiadomości.");
    }

    #[tokio::test]
    async fn not_found_returns_404() {
        let response =
            ApiError::NotFound("Nie znaleziono zgłoszenia o podanym ID".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn upstream_returns_502_and_hides_detail() {
        let response = ApiError::Upstream {
            detail: "connection refused".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "UPSTREAM");
        assert_eq!(json["error"]["message"], "Nie udało się przetworzyć żądania");
    }

    #[tokio::test]
    async fn internal_returns_500_and_hides_detail() {
        let response = ApiError::Internal("lock poisoned".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "Wystąpił błąd wewnętrzny");
    }

    #[tokio::test]
    async fn submit_errors_map_to_400() {
        let api: ApiError = SubmitError::MissingDecision.into();
        assert_eq!(api.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn adjudicator_errors_map_to_502() {
        let api: ApiError = AdjudicatorError::Timeout(120).into();
        assert_eq!(api.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn export_not_found_maps_to_404() {
        let api: ApiError = ExportError::NotFound.into();
        let response = api.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(
            json["error"]["message"],
            "Nie znaleziono zgłoszenia o podanym ID"
        );
    }
}
