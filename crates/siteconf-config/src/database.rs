//! Database connection descriptor.
//!
//! The site runs on a single SQLite file. Where that file lives depends on
//! the deployment environment:
//!
//! - `DEV`: `<base_dir>/db.sqlite3`
//! - `PROD`: `<DB_LOCATION>/db.sqlite3`, so the database can sit on a mounted
//!   volume outside the project tree
//!
//! # Environment Variables
//!
//! - `DB_LOCATION`: Directory holding the production database (default: empty,
//!   which resolves relative to the working directory)

use std::path::{Path, PathBuf};

use serde::Serialize;
use siteconf_core::{EnvSource, Environment};
use tracing::info;

pub const SQLITE_ENGINE: &str = "django.db.backends.sqlite3";
pub const DATABASE_FILE_NAME: &str = "db.sqlite3";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DatabaseConfig {
    pub engine: String,
    pub name: PathBuf,
}

impl DatabaseConfig {
    pub fn from_env(env: &impl EnvSource, environment: Environment, base_dir: &Path) -> Self {
        let directory = match environment {
            Environment::Dev => base_dir.to_path_buf(),
            Environment::Prod => env.get_or("DB_LOCATION", PathBuf::new()),
        };

        let config = Self::sqlite(directory.join(DATABASE_FILE_NAME));
        if environment.is_prod() {
            info!(location = %config.name.display(), "Using production database location");
        }

        config
    }

    pub fn sqlite(name: impl Into<PathBuf>) -> Self {
        Self {
            engine: SQLITE_ENGINE.to_string(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteconf_core::Env;

    #[test]
    fn test_dev_uses_base_dir() {
        let env = Env::new().with("DB_LOCATION", "/var/lib/site");
        let config = DatabaseConfig::from_env(&env, Environment::Dev, Path::new("/srv/app"));
        assert_eq!(config.engine, SQLITE_ENGINE);
        assert_eq!(config.name, PathBuf::from("/srv/app/db.sqlite3"));
    }

    #[test]
    fn test_prod_uses_db_location() {
        let env = Env::new().with("DB_LOCATION", "/var/lib/site");
        let config = DatabaseConfig::from_env(&env, Environment::Prod, Path::new("/srv/app"));
        assert_eq!(config.name, PathBuf::from("/var/lib/site/db.sqlite3"));
    }

    #[test]
    fn test_prod_without_location_is_relative() {
        let config = DatabaseConfig::from_env(&Env::new(), Environment::Prod, Path::new("/srv/app"));
        assert_eq!(config.name, PathBuf::from("db.sqlite3"));
    }
}
