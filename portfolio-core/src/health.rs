use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ComponentHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub components: HashMap<String, ComponentHealth>,
    pub timestamp: f64,
}

#[derive(Clone)]
pub struct HealthState {
    pub service_name: String,
    pub version: String,
    /// Directory the site serves static assets from, if any.
    pub public_dir: Option<PathBuf>,
}

fn check_public_dir(dir: &Path) -> ComponentHealth {
    if dir.is_dir() {
        ComponentHealth {
            status: "available".to_string(),
            path: Some(dir.display().to_string()),
            error: None,
        }
    } else {
        warn!("Static asset directory missing: {}", dir.display());
        ComponentHealth {
            status: "error".to_string(),
            path: Some(dir.display().to_string()),
            error: Some("directory not found".to_string()),
        }
    }
}

/// Routes are relative; mount the returned router under the site's API prefix.
pub fn create_health_router(
    service_name: String,
    version: String,
    public_dir: Option<PathBuf>,
) -> Router {
    let state = HealthState {
        service_name,
        version,
        public_dir,
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/health/live", get(liveness_handler))
        .route("/health/ready", get(readiness_handler))
        .with_state(Arc::new(state))
}

async fn health_handler(State(state): State<Arc<HealthState>>) -> Json<HealthResponse> {
    let mut components = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    if let Some(dir) = &state.public_dir {
        let h = check_public_dir(dir);
        if h.status == "error" {
            overall_status = HealthStatus::Degraded;
        }
        components.insert("static_assets".to_string(), h);
    }

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64();

    Json(HealthResponse {
        status: overall_status,
        service: state.service_name.clone(),
        version: state.version.clone(),
        components,
        timestamp,
    })
}

async fn liveness_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "alive"}))
}

async fn readiness_handler(State(state): State<Arc<HealthState>>) -> Response {
    if let Some(dir) = &state.public_dir {
        let h = check_public_dir(dir);
        if h.status == "error" {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({"status": "not_ready", "reason": "static_assets_unavailable"})),
            )
                .into_response();
        }
    }
    (StatusCode::OK, Json(serde_json::json!({"status": "ready"}))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn liveness_is_always_alive() {
        let router = create_health_router("portfolio".into(), "0.1.0".into(), None);
        let (status, body) = get_json(router, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "alive");
    }

    #[tokio::test]
    async fn health_reports_existing_public_dir() {
        let dir = tempfile::tempdir().unwrap();
        let router = create_health_router(
            "portfolio".into(),
            "0.1.0".into(),
            Some(dir.path().to_path_buf()),
        );
        let (status, body) = get_json(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "portfolio");
        assert_eq!(body["components"]["static_assets"]["status"], "available");
    }

    #[tokio::test]
    async fn missing_public_dir_degrades_and_fails_readiness() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let router = create_health_router("portfolio".into(), "0.1.0".into(), Some(missing.clone()));
        let (_, body) = get_json(router, "/health").await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["components"]["static_assets"]["status"], "error");

        let router = create_health_router("portfolio".into(), "0.1.0".into(), Some(missing));
        let (status, body) = get_json(router, "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not_ready");
    }
}
