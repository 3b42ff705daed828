//! # SiteConf
//!
//! Environment-driven settings for a server-rendered web site with social
//! login. Settings are loaded once at process start into an immutable
//! [`Settings`] value and handed by reference to the web runtime.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── siteconf-core/           # Host list parser, env snapshot, errors, secrets
//! ├── siteconf-config/         # Settings sections and the Settings aggregate
//! └── siteconf-observability/  # Logging setup
//! src/
//! ├── cli.rs                   # `siteconf` subcommands
//! └── main.rs                  # Binary entry point
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! # required
//! EMAIL_HOST_USER=mailer@example.com
//! EMAIL_HOST_PASSWORD=app-password
//! GITHUB_CLIENT_ID=...
//! GITHUB_CLIENT_SECRET=...
//! GOOGLE_CLIENT_ID=...
//! GOOGLE_CLIENT_SECRET=...
//!
//! # optional
//! ENV=PROD
//! DEBUG=false
//! ALLOWED_HOSTS=example.com,www.example.com
//! CSRF_TRUSTED_ORIGINS=https://example.com
//! DB_LOCATION=/var/lib/site
//! ```
//!
//! A `.env` file in the base directory is read as well; variables already set
//! in the process take precedence.
//!
//! ## Quick Start
//!
//! ```bash
//! siteconf check
//! siteconf show --pretty
//! siteconf hosts "localhost, 127.0.0.1"
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface

pub mod cli;

// Re-export workspace crates for convenience
pub use siteconf_config;
pub use siteconf_core;
pub use siteconf_observability;

pub use siteconf_config::Settings;
pub use siteconf_core::{ConfigError, Env, EnvSource, parse_csv, parse_host_list};
