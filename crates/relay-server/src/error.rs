//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::upstream::UpstreamError;

/// Body returned for every failed request.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Handler-level errors. Every variant renders as a bare 500.
#[derive(Debug)]
pub enum AppError {
    Upstream(UpstreamError),
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        AppError::Upstream(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream(e) => error!(error = %e, "Upstream fetch failed"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
    }
}
