//! `GET /api/users`: relays the members document.

use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};

use crate::error::AppError;
use crate::ServerState;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Fetches the upstream document and returns its bytes unchanged.
pub async fn list(State(state): State<Arc<ServerState>>) -> Result<impl IntoResponse, AppError> {
    let body = state.upstream.fetch().await?;
    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body))
}
