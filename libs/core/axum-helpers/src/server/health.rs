use axum::{Json, Router, routing::get};
use core_config::AppInfo;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::future::Future;
use std::pin::Pin;
use utoipa::ToSchema;

/// Boxed health check future resolving to `(component, healthy)`.
pub type HealthCheckFuture = Pin<Box<dyn Future<Output = (String, bool)> + Send>>;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub name: String,
    pub version: String,
}

/// Run a set of named health checks concurrently and return a JSON map of
/// component statuses plus an overall flag.
pub async fn run_health_checks(checks: Vec<HealthCheckFuture>) -> serde_json::Value {
    let results = join_all(checks).await;

    let mut components = serde_json::Map::new();
    let mut healthy = true;
    for (name, ok) in results {
        if !ok {
            healthy = false;
        }
        components.insert(
            name,
            json!(if ok { "healthy" } else { "unhealthy" }),
        );
    }

    json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "components": components,
    })
}

async fn health_handler(info: AppInfo) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        name: info.name.to_string(),
        version: info.version.to_string(),
    })
}

/// Router exposing liveness endpoints at `/health` and `/healthz`.
pub fn health_router(info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(move || health_handler(info)))
        .route("/healthz", get(move || health_handler(info)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(name: &str, ok: bool) -> HealthCheckFuture {
        let name = name.to_string();
        Box::pin(async move { (name, ok) })
    }

    #[tokio::test]
    async fn all_healthy() {
        let status = run_health_checks(vec![ready("mongodb", true)]).await;
        assert_eq!(status["status"], "healthy");
        assert_eq!(status["components"]["mongodb"], "healthy");
    }

    #[tokio::test]
    async fn one_unhealthy_marks_overall_unhealthy() {
        let status =
            run_health_checks(vec![ready("mongodb", true), ready("cache", false)]).await;
        assert_eq!(status["status"], "unhealthy");
        assert_eq!(status["components"]["cache"], "unhealthy");
    }
}
