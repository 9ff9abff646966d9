use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use digitalpro_core::error::CoreError;
use digitalpro_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every variant maps to `400 Bad Request` with a `{"error", "code"}` JSON
/// body. Store failures carry the backend's message unchanged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `digitalpro_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the record store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A malformed request: undecodable body, bad path parameter.
    #[error("{0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Stable machine-readable code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(CoreError::Validation(_)) => "VALIDATION_ERROR",
            AppError::Store(_) => "STORE_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store(err) = &self {
            tracing::warn!(error = %err, "Record store operation failed");
        }

        let body = json!({
            "error": self.to_string(),
            "code": self.code(),
        });

        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}
