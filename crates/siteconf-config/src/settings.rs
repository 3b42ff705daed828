//! The complete, immutable settings value.
//!
//! Built once at process start and passed by reference to whatever consumes
//! it. Loading is fail-fast: the first missing or invalid required setting
//! aborts the load and no partially filled [`Settings`] is ever returned.

use std::path::{Path, PathBuf};

use serde::Serialize;
use siteconf_core::{ConfigError, Env, EnvSource};
use tracing::{debug, info};

use crate::database::DatabaseConfig;
use crate::email::EmailConfig;
use crate::security::SecurityConfig;
use crate::site::SiteLayout;
use crate::social::SocialProviders;

/// File read from the base directory by [`Settings::from_env`].
pub const ENV_FILE_NAME: &str = ".env";

#[derive(Clone, Debug, Serialize)]
pub struct Settings {
    pub base_dir: PathBuf,
    pub security: SecurityConfig,
    pub email: EmailConfig,
    pub database: DatabaseConfig,
    pub social: SocialProviders,
    pub site: SiteLayout,
}

impl Settings {
    /// Builds every section from `env`, in declaration order.
    ///
    /// # Errors
    ///
    /// The first [`ConfigError`] raised by any section.
    pub fn load(env: &impl EnvSource, base_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let base_dir = base_dir.into();

        let security = SecurityConfig::from_env(env)?;
        let email = EmailConfig::from_env(env)?;
        let database = DatabaseConfig::from_env(env, security.environment, &base_dir);
        let social = SocialProviders::from_env(env)?;
        let site = SiteLayout::new(&base_dir);

        let settings = Self {
            base_dir,
            security,
            email,
            database,
            social,
            site,
        };

        info!(
            environment = %settings.security.environment,
            debug = settings.security.debug,
            allowed_hosts = settings.security.allowed_hosts.len(),
            trusted_origins = settings.security.csrf_trusted_origins.len(),
            "Settings loaded"
        );

        Ok(settings)
    }

    /// Loads from the process environment, seeded by `<base_dir>/.env`.
    ///
    /// Variables already set in the process take precedence over the file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EnvFile`] if the env file is unreadable, otherwise
    /// whatever [`Settings::load`] returns.
    pub fn from_env(base_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let base_dir = base_dir.into();
        let env = Env::from_std_env().with_dotenv(base_dir.join(ENV_FILE_NAME))?;
        debug!(variables = env.len(), "Captured environment");

        Self::load(&env, base_dir)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Settings as a JSON mapping, with every secret redacted.
    ///
    /// # Errors
    ///
    /// Fails if a path in the settings is not valid UTF-8.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
