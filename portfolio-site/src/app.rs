use crate::access_gate::{access_gate_middleware, GateConfig, GateState};
use crate::config::Settings;
use crate::pages::{content::Portfolio, PageError, RenderedPages};
use axum::{
    extract::State,
    middleware,
    response::Html,
    routing::get,
    Json, Router,
};
use portfolio_core::health::create_health_router;
use portfolio_core::metrics::{MetricLabels, MetricsSnapshot, SimpleMetrics};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

pub const SERVICE_NAME: &str = "portfolio-site";

#[derive(Clone)]
pub struct AppState {
    pub pages: RenderedPages,
}

/// Assembles the full application: page routes, `/api`, the public directory,
/// and the access gate in front of all of it.
pub fn build_router(settings: &Settings) -> Result<Router, PageError> {
    let pages = RenderedPages::render(&Portfolio::default())?;
    let metrics = Arc::new(SimpleMetrics::new(Some(MetricLabels {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ..Default::default()
    })));

    let gate = Arc::new(GateState {
        config: GateConfig::from_settings(settings),
        failure_page: pages.auth_failed.clone(),
        metrics: metrics.clone(),
    });

    let api = create_health_router(
        SERVICE_NAME.to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
        Some(settings.public_dir.clone()),
    )
    .merge(
        Router::new()
            .route("/metrics", get(metrics_handler))
            .with_state(metrics),
    );

    info!(
        public_dir = %settings.public_dir.display(),
        realm = %settings.auth_realm,
        "Router assembled"
    );

    Ok(Router::new()
        .route("/", get(home))
        .with_state(Arc::new(AppState { pages }))
        .nest("/api", api)
        .fallback_service(ServeDir::new(&settings.public_dir))
        .layer(middleware::from_fn_with_state(gate, access_gate_middleware))
        .layer(TraceLayer::new_for_http()))
}

async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.pages.home.to_string())
}

async fn metrics_handler(State(metrics): State<Arc<SimpleMetrics>>) -> Json<MetricsSnapshot> {
    Json(metrics.snapshot())
}
