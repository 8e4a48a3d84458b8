//! Server-rendered HTML.
//!
//! Both documents are static, so they are rendered once at startup and
//! shared read-only across requests.

pub mod content;

use crate::failure_marker::COOKIE_NAME;
use content::Portfolio;
use handlebars::{Handlebars, RenderError, TemplateError};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

const HOME_TEMPLATE: &str = include_str!("../../templates/home.hbs");
const AUTH_FAILED_TEMPLATE: &str = include_str!("../../templates/auth_failed.hbs");

#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid template: {0}")]
    Template(#[from] Box<TemplateError>),
    #[error("failed to render page: {0}")]
    Render(#[from] RenderError),
}

#[derive(Clone, Debug)]
pub struct RenderedPages {
    pub home: Arc<str>,
    pub auth_failed: Arc<str>,
}

impl RenderedPages {
    pub fn render(portfolio: &Portfolio) -> Result<Self, PageError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string("home", HOME_TEMPLATE)
            .map_err(Box::new)?;
        handlebars
            .register_template_string("auth_failed", AUTH_FAILED_TEMPLATE)
            .map_err(Box::new)?;

        let home = handlebars.render("home", portfolio)?;
        let auth_failed = handlebars.render("auth_failed", &json!({ "cookie_name": COOKIE_NAME }))?;

        Ok(Self {
            home: home.into(),
            auth_failed: auth_failed.into(),
        })
    }
}
