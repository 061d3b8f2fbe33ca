use axum::{http::StatusCode, response::IntoResponse, Json};
use tracing::{error, warn};
use crate::errors::OtesError;
use super::models::UploadResponse;

impl IntoResponse for OtesError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            OtesError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "OpenAI API key not configured"),
            OtesError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "Invalid request"),
            OtesError::UploadTransport(_) => (StatusCode::OK, "File upload error"),
            OtesError::FileType(_) => (StatusCode::OK, "Invalid file type"),
            OtesError::Persistence(_) => (StatusCode::OK, "File upload failed"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
        };

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Request rejected");
        }

        (status, Json(UploadResponse::error(message))).into_response()
    }
}
