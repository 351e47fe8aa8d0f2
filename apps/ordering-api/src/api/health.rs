//! Readiness endpoint

use axum::{http::StatusCode, routing::get, Json, Router};
use database::mongodb::check_health_detailed;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    service: String,
    version: String,
    mongodb_response_ms: u64,
}

async fn ready(state: AppState) -> Result<Json<ReadyResponse>, StatusCode> {
    // Readiness requires a live MongoDB connection
    let mongo = check_health_detailed(&state.mongo_client).await;
    if !mongo.healthy {
        tracing::warn!(error = ?mongo.message, "readiness check failed");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(ReadyResponse {
        status: "ready".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        mongodb_response_ms: mongo.response_time_ms,
    }))
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(move || ready(state)))
}
