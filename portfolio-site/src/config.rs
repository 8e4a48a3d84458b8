use config::{Config, Environment, File, FileFormat, Map};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_AUTH_USER: &str = "kurita";
pub const DEFAULT_AUTH_PASSWORD: &str = "chicken";
pub const DEFAULT_REALM: &str = "Secure Area";
pub const DEFAULT_FAILURE_TTL_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid bind address {addr:?}: {source}")]
    BindAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Process-wide settings, loaded once at startup and handed to the router.
///
/// Sources, lowest precedence first: built-in defaults, an optional
/// `portfolio.toml` in the working directory, `.env`, then the process
/// environment. Credentials live under `auth` and only `BASIC_AUTH_USER` and
/// `BASIC_AUTH_PASSWORD` reach them; everything else comes from
/// `PORTFOLIO_*`.
#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub auth: AuthSettings,
    pub bind_addr: String,
    pub public_dir: PathBuf,
    pub auth_realm: String,
    pub failure_ttl_secs: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuthSettings {
    pub user: String,
    pub password: String,
}

impl Settings {
    pub fn new() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::load(None)
    }

    /// `env` replaces the process environment when given.
    fn load(env: Option<Map<String, String>>) -> Result<Self, SettingsError> {
        // BASIC_AUTH_USER -> auth.user; values stay strings ("007" is a password, not 7)
        let credentials = Environment::with_prefix("BASIC")
            .separator("_")
            .source(env.clone());
        // no separator, so PORTFOLIO_AUTH_USER lands on an unknown flat key
        let service = Environment::with_prefix("PORTFOLIO").source(env);

        let config = Self::defaults()?
            .add_source(File::new("portfolio", FileFormat::Toml).required(false))
            .add_source(credentials)
            .add_source(service)
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Builds settings from defaults overlaid with a TOML document, ignoring
    /// the environment.
    pub fn from_toml(source: &str) -> Result<Self, SettingsError> {
        let config = Self::defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, SettingsError> {
        Ok(Config::builder()
            .set_default("auth.user", DEFAULT_AUTH_USER)?
            .set_default("auth.password", DEFAULT_AUTH_PASSWORD)?
            .set_default("bind_addr", "0.0.0.0:3000")?
            .set_default("public_dir", "public")?
            .set_default("auth_realm", DEFAULT_REALM)?
            .set_default("failure_ttl_secs", DEFAULT_FAILURE_TTL_SECS)?)
    }

    pub fn socket_addr(&self) -> Result<std::net::SocketAddr, SettingsError> {
        self.bind_addr
            .parse()
            .map_err(|source| SettingsError::BindAddr {
                addr: self.bind_addr.clone(),
                source,
            })
    }

    pub fn failure_ttl(&self) -> Duration {
        Duration::from_secs(self.failure_ttl_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auth: AuthSettings {
                user: DEFAULT_AUTH_USER.to_string(),
                password: DEFAULT_AUTH_PASSWORD.to_string(),
            },
            bind_addr: "0.0.0.0:3000".to_string(),
            public_dir: PathBuf::from("public"),
            auth_realm: DEFAULT_REALM.to_string(),
            failure_ttl_secs: DEFAULT_FAILURE_TTL_SECS,
        }
    }
}
