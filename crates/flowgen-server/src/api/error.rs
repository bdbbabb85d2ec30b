use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use flowgen_core::CodegenError;
use serde_json::json;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.message }))).into_response()
    }
}

impl From<CodegenError> for ApiError {
    fn from(err: CodegenError) -> Self {
        if err.is_client_error() {
            tracing::warn!(error = %err, "Rejected code generation request");
            Self::bad_request(err.to_string())
        } else {
            tracing::error!(error = %err, "Code generation failed");
            Self::internal(err.to_string())
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "API error");
        Self::internal(err.to_string())
    }
}
