//! Request handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::AppState;
use crate::platform::{RequestEnvelope, ResponseEnvelope};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// Handler for GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Handler for POST /alexa
pub async fn handle_skill_request(
    State(state): State<AppState>,
    body: Result<Json<RequestEnvelope>, JsonRejection>,
) -> ApiResult<Json<ResponseEnvelope>> {
    let Json(envelope) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    debug!(request = ?envelope.request, "Inbound skill request");

    let response = state.skill.handle(&envelope).await?;
    Ok(Json(response))
}
