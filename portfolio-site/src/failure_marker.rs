//! Short-lived client cookie recording a failed login.
//!
//! While the marker is set, the gate answers with the failure page instead
//! of a `WWW-Authenticate` challenge, so the browser stops re-prompting.

use axum::http::header::{self, InvalidHeaderValue};
use axum::http::{HeaderMap, HeaderValue};
use std::time::Duration;

pub const COOKIE_NAME: &str = "auth_failed";
const SET_VALUE: &str = "true";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureMarker {
    max_age: Duration,
}

impl FailureMarker {
    pub fn new(max_age: Duration) -> Self {
        Self { max_age }
    }

    /// True when any `Cookie` header carries `auth_failed=true`.
    pub fn is_set(&self, headers: &HeaderMap) -> bool {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .any(|(key, value)| key == COOKIE_NAME && value == SET_VALUE)
    }

    pub fn set_cookie(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let cookie = format!(
            "{}={}; Path=/; Max-Age={}",
            COOKIE_NAME,
            SET_VALUE,
            self.max_age.as_secs()
        );
        HeaderValue::try_from(cookie)
    }

    pub fn clear_cookie(&self) -> HeaderValue {
        HeaderValue::from_static("auth_failed=; Path=/; Max-Age=0")
    }
}

impl Default for FailureMarker {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}
