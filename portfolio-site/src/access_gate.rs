use crate::config::Settings;
use crate::credentials::CredentialPair;
use crate::failure_marker::FailureMarker;
use crate::route_matcher::RouteMatcher;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use portfolio_core::metrics::{MetricNames, SimpleMetrics};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub const CHALLENGE_BODY: &str = "認証が必要です";

/// Immutable gate configuration, built once at startup.
#[derive(Clone, Debug)]
pub struct GateConfig {
    pub credentials: CredentialPair,
    pub realm: String,
    pub failure_marker: FailureMarker,
    pub routes: RouteMatcher,
}

impl GateConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            credentials: CredentialPair::new(
                settings.auth.user.clone(),
                settings.auth.password.clone(),
            ),
            realm: settings.auth_realm.clone(),
            failure_marker: FailureMarker::new(settings.failure_ttl()),
            routes: RouteMatcher::default(),
        }
    }

    /// Decides from the request path and headers alone. Rejections are
    /// logged at `warn` with the path and never the credentials.
    pub fn decide(&self, path: &str, headers: &HeaderMap) -> GateOutcome {
        if !self.routes.is_gated(path) {
            return GateOutcome::Excluded;
        }
        if self.routes.is_static_asset(path) {
            return GateOutcome::StaticAsset;
        }
        if self.failure_marker.is_set(headers) {
            return GateOutcome::MarkedFailure;
        }

        let Some(value) = headers.get(header::AUTHORIZATION) else {
            return GateOutcome::Challenge;
        };

        match CredentialPair::from_header_bytes(value.as_bytes()) {
            Ok(pair) if self.credentials.matches(&pair) => GateOutcome::Success,
            Ok(_) => {
                warn!(path, "Rejected credentials");
                GateOutcome::Failure
            }
            Err(e) => {
                warn!(path, reason = %e, "Malformed authorization header");
                GateOutcome::Failure
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Route is outside the gate entirely.
    Excluded,
    StaticAsset,
    Challenge,
    /// Failure marker already present; headers were not inspected.
    MarkedFailure,
    Failure,
    Success,
}

impl GateOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excluded => "excluded",
            Self::StaticAsset => "static_asset",
            Self::Challenge => "challenge",
            Self::MarkedFailure => "marked_failure",
            Self::Failure => "failure",
            Self::Success => "success",
        }
    }
}

#[derive(Clone)]
pub struct GateState {
    pub config: GateConfig,
    pub failure_page: Arc<str>,
    pub metrics: Arc<SimpleMetrics>,
}

impl GateState {
    fn challenge(&self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [
                (header::WWW_AUTHENTICATE, format!("Basic realm=\"{}\"", self.config.realm)),
                (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            ],
            CHALLENGE_BODY,
        )
            .into_response()
    }

    fn failure_page(&self) -> Response {
        (StatusCode::UNAUTHORIZED, Html(self.failure_page.to_string())).into_response()
    }

    fn record(&self, outcome: GateOutcome) {
        let labels = HashMap::from([("outcome".to_string(), outcome.as_str().to_string())]);
        self.metrics
            .increment(MetricNames::GATE_DECISIONS_TOTAL, 1, Some(labels));
    }
}

pub async fn access_gate_middleware(
    State(state): State<Arc<GateState>>,
    request: Request,
    next: Next,
) -> Response {
    let outcome = state
        .config
        .decide(request.uri().path(), request.headers());
    debug!(path = request.uri().path(), outcome = outcome.as_str(), "Gate decision");
    state.record(outcome);

    match outcome {
        GateOutcome::Excluded | GateOutcome::StaticAsset => next.run(request).await,
        GateOutcome::Challenge => state.challenge(),
        GateOutcome::MarkedFailure => state.failure_page(),
        GateOutcome::Failure => {
            let mut response = state.failure_page();
            match state.config.failure_marker.set_cookie() {
                Ok(cookie) => {
                    response.headers_mut().append(header::SET_COOKIE, cookie);
                }
                Err(e) => error!("Failed to build failure marker cookie: {}", e),
            }
            response
        }
        GateOutcome::Success => {
            let mut response = next.run(request).await;
            response
                .headers_mut()
                .append(header::SET_COOKIE, state.config.failure_marker.clear_cookie());
            response
        }
    }
}
