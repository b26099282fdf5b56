use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tokio::task::JoinError;

use crate::certificate::ComposeError;

/// Why a certificate request produced no certificate.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing form field: {0}")]
    MissingField(&'static str),

    #[error("malformed form submission: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error("certificate worker failed: {0}")]
    Worker(#[from] JoinError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::Multipart(e) => e.status(),
            AppError::Compose(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Compose(_) | AppError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Certificate generation failed: {}", self);
        } else {
            tracing::warn!("Rejected certificate request: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}
