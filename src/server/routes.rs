//! HTTP route handlers

use crate::checker::CheckResponse;
use crate::server::params::{CheckParams, ParamError};
use crate::server::AppState;
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// JSON error body for rejected requests
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl From<ParamError> for ApiError {
    fn from(e: ParamError) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}

/// `GET /check`
///
/// Only query validation can fail; every fetch or parse problem is reported
/// inside a 200 response.
pub async fn check_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<CheckResponse>, ApiError> {
    let params = CheckParams::from_query(query.as_deref().unwrap_or_default()).map_err(|e| {
        tracing::debug!("Rejected /check query: {}", e);
        ApiError::from(e)
    })?;

    let request = params.into_request(&state.default_bots);
    tracing::debug!(
        "Checking {} for {} agent(s)",
        request.url,
        request.bots.len()
    );

    Ok(Json(state.checker.check(&request).await))
}
