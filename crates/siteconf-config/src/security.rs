//! Site identity and request-filtering settings.
//!
//! # Environment Variables
//!
//! - `SECRET_KEY`: Signing key (default: a development-only key)
//! - `DEBUG`: Debug mode (default: `true`)
//! - `ENV`: `DEV` or `PROD` (default: `DEV`)
//! - `ALLOWED_HOSTS`: Comma-separated host names (default: `localhost,127.0.0.1`)
//! - `CSRF_TRUSTED_ORIGINS`: Comma-separated origins, each with a scheme such
//!   as `https://` (default: empty)
//! - `SITE_TITLE`: Display title (default: `Django Setup Project`)

use serde::Serialize;
use siteconf_core::{ConfigError, EnvSource, Environment, Secret};
use tracing::warn;

pub const DEFAULT_SECRET_KEY: &str = "2%(zb7^s@d-mbp1b!=g@(^!$a2#-y)fexa@s(!ex)n_x+s1ypn";
pub const DEFAULT_ALLOWED_HOSTS: &str = "localhost,127.0.0.1";
pub const DEFAULT_SITE_TITLE: &str = "Django Setup Project";

#[derive(Clone, Debug, Serialize)]
pub struct SecurityConfig {
    pub secret_key: Secret,
    pub debug: bool,
    pub environment: Environment,
    pub allowed_hosts: Vec<String>,
    pub csrf_trusted_origins: Vec<String>,
    pub site_title: String,
    pub site_id: u32,
}

impl SecurityConfig {
    /// # Errors
    ///
    /// [`ConfigError::InvalidOrigin`] if a trusted origin has no scheme.
    pub fn from_env(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let csrf_trusted_origins = env.get_list("CSRF_TRUSTED_ORIGINS", "");
        validate_trusted_origins(&csrf_trusted_origins)?;

        if let Some(raw) = env.var("ENV").filter(|v| v != "DEV" && v != "PROD") {
            warn!(value = %raw, "ENV is neither DEV nor PROD, using DEV");
        }

        let config = Self {
            secret_key: Secret::new(env.get_or("SECRET_KEY", DEFAULT_SECRET_KEY.to_string())),
            debug: env.get_or("DEBUG", true),
            environment: env.get_or("ENV", Environment::Dev),
            allowed_hosts: env.get_list("ALLOWED_HOSTS", DEFAULT_ALLOWED_HOSTS),
            csrf_trusted_origins,
            site_title: env.get_or("SITE_TITLE", DEFAULT_SITE_TITLE.to_string()),
            site_id: 1,
        };

        if config.environment.is_prod() {
            if config.debug {
                warn!("DEBUG is enabled while ENV=PROD");
            }
            if config.uses_default_secret_key() {
                warn!("SECRET_KEY is the development default while ENV=PROD");
            }
        }

        Ok(config)
    }

    pub fn uses_default_secret_key(&self) -> bool {
        self.secret_key.expose() == DEFAULT_SECRET_KEY
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            secret_key: Secret::new(DEFAULT_SECRET_KEY),
            debug: true,
            environment: Environment::Dev,
            allowed_hosts: siteconf_core::parse_csv(DEFAULT_ALLOWED_HOSTS),
            csrf_trusted_origins: Vec::new(),
            site_title: DEFAULT_SITE_TITLE.to_string(),
            site_id: 1,
        }
    }
}

/// Every trusted origin needs `<scheme>://<host>`.
fn validate_trusted_origins(origins: &[String]) -> Result<(), ConfigError> {
    match origins.iter().find(|origin| !has_scheme(origin)) {
        Some(origin) => Err(ConfigError::InvalidOrigin {
            origin: origin.clone(),
        }),
        None => Ok(()),
    }
}

fn has_scheme(origin: &str) -> bool {
    let Some((scheme, rest)) = origin.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());

    starts_with_letter
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.is_empty()
}
