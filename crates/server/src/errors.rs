use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::{debug, error};

/// JSON error response: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: String,
    /// `ServiceError::code()` when the error came from the service layer.
    pub code: Option<u16>,
}

impl ApiError {
    pub fn new(status: StatusCode, title: &'static str, message: impl Into<String>) -> Self {
        Self { status, title, message: message.into(), code: None }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", message)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        let code = e.code();
        if e.is_business() {
            debug!(code, reason = %message, "request rejected by business rule");
        }
        let api = match e {
            ServiceError::Validation(_) => Self::new(StatusCode::BAD_REQUEST, "Validation Error", message),
            ServiceError::DuplicateEmail(_) => Self::new(StatusCode::BAD_REQUEST, "Duplicate Email", message),
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", message),
            ServiceError::Db(_) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", message),
        };
        Self { code: Some(code), ..api }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        Self::bad_request(r.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self {
        Self::bad_request(r.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), code = ?self.code, error = %self.message, "request failed");
        }
        (self.status, Json(serde_json::json!({"error": self.title, "message": self.message}))).into_response()
    }
}
