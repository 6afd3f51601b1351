use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use concierge_core::AppError;
use tracing::error;

mod types;

pub use types::ErrorResponse;

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self(AppError::Validation(format!(
            "invalid request body: {}",
            value.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match self.0 {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "invalid_role_request"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "assignment_not_found"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "missing_system_credentials"),
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, "system_mismatch"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        // Internal details stay in the logs.
        let message = match self.0 {
            AppError::Internal(detail) => {
                error!(%detail, "request failed with internal error");
                "internal server error".to_owned()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use concierge_core::AppError;
    use serde_json::Value;

    use super::ApiError;

    async fn render(error: AppError) -> (StatusCode, Value) {
        let response = ApiError(error).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_else(|_| unreachable!());
        let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| unreachable!());
        (status, body)
    }

    #[tokio::test]
    async fn each_error_kind_has_status_and_code() {
        let cases = [
            (
                AppError::Validation("bad".to_owned()),
                StatusCode::BAD_REQUEST,
                "invalid_role_request",
            ),
            (
                AppError::NotFound("gone".to_owned()),
                StatusCode::NOT_FOUND,
                "assignment_not_found",
            ),
            (
                AppError::Unauthorized("who".to_owned()),
                StatusCode::UNAUTHORIZED,
                "missing_system_credentials",
            ),
            (
                AppError::Forbidden("nope".to_owned()),
                StatusCode::FORBIDDEN,
                "system_mismatch",
            ),
        ];

        for (error, expected_status, expected_code) in cases {
            let (status, body) = render(error).await;
            assert_eq!(status, expected_status);
            assert_eq!(body["code"], expected_code);
        }
    }

    #[tokio::test]
    async fn internal_detail_is_not_exposed() {
        let (status, body) = render(AppError::Internal("audit sequence exhausted".to_owned())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "internal_error");
        assert_eq!(body["message"], "internal server error");
    }
}
