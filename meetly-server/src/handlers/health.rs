use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::infra::app_state::AppState;

pub async fn ping_handler() -> Json<Value> {
    info!("Ping endpoint called");
    Json(json!({
        "status": "ok",
        "message": "Meetly profile server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Reports `healthy`, or `degraded` with 503 when the database is unreachable.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let mut health_status = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    let status = match state.profiles().health().await {
        Ok(()) => {
            health_status["checks"]["database"] = json!({ "status": "healthy" });
            StatusCode::OK
        }
        Err(err) => {
            warn!(error = %err, "database health check failed");
            health_status["checks"]["database"] = json!({
                "status": "unhealthy",
                "error": "数据库不可用"
            });
            health_status["status"] = json!("degraded");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (status, Json(health_status))
}
