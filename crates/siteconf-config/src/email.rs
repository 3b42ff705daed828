//! Outgoing email transport settings.
//!
//! # Environment Variables
//!
//! - `EMAIL_BACKEND`: Transport backend (default: console backend)
//! - `EMAIL_HOST`: SMTP host (default: `smtp.gmail.com`)
//! - `EMAIL_PORT`: SMTP port (default: `465`)
//! - `EMAIL_USE_SSL`: Implicit TLS (default: `true`)
//! - `EMAIL_USE_TLS`: STARTTLS (default: `false`)
//! - `EMAIL_HOST_USER`: SMTP user name (required)
//! - `EMAIL_HOST_PASSWORD`: SMTP password (required)
//! - `DEFAULT_FROM_EMAIL`: Sender address (default: `EMAIL_HOST_USER`)

use serde::Serialize;
use siteconf_core::{ConfigError, EnvSource, Secret};

pub const DEFAULT_EMAIL_BACKEND: &str = "django.core.mail.backends.console.EmailBackend";
pub const DEFAULT_EMAIL_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_EMAIL_PORT: u16 = 465;

#[derive(Clone, Debug, Serialize)]
pub struct EmailConfig {
    pub backend: String,
    /// Backend used by the queued mailer; mirrors `backend`.
    pub mailer_backend: String,
    pub host: String,
    pub port: u16,
    pub use_ssl: bool,
    pub use_tls: bool,
    pub host_user: String,
    pub host_password: Secret,
    pub default_from_email: String,
}

impl EmailConfig {
    /// # Errors
    ///
    /// [`ConfigError::MissingRequiredSetting`] when `EMAIL_HOST_PASSWORD` or
    /// `EMAIL_HOST_USER` is unset.
    pub fn from_env(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let backend = env.get_or("EMAIL_BACKEND", DEFAULT_EMAIL_BACKEND.to_string());
        let host_password: String = env.require("EMAIL_HOST_PASSWORD")?;
        let host_user: String = env.require("EMAIL_HOST_USER")?;

        Ok(Self {
            mailer_backend: backend.clone(),
            backend,
            host: env.get_or("EMAIL_HOST", DEFAULT_EMAIL_HOST.to_string()),
            port: env.get_or("EMAIL_PORT", DEFAULT_EMAIL_PORT),
            use_ssl: env.get_or("EMAIL_USE_SSL", true),
            use_tls: env.get_or("EMAIL_USE_TLS", false),
            default_from_email: env.get_or("DEFAULT_FROM_EMAIL", host_user.clone()),
            host_user,
            host_password: Secret::from(host_password),
        })
    }
}
