//! # SiteConf Config
//!
//! Settings sections for the site, each loaded from an environment snapshot:
//!
//! - [`security`]: Secret key, debug flag, deployment environment, host and origin allow-lists
//! - [`email`]: Email/SMTP transport
//! - [`database`]: SQLite database descriptor, switched by `ENV`
//! - [`social`]: GitHub and Google login provider descriptors
//! - [`site`]: Installed apps, middleware, templates, static and media files
//! - [`settings`]: The [`Settings`] aggregate built from all of the above
//!
//! # Example
//!
//! ```ignore
//! use siteconf_config::Settings;
//!
//! // Reads ./.env (if present) and the process environment
//! let settings = Settings::from_env(std::env::current_dir()?)?;
//! println!("{:?}", settings.security.allowed_hosts);
//! ```

pub mod database;
pub mod email;
pub mod security;
pub mod settings;
pub mod site;
pub mod social;

// Re-export commonly used types at crate root
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use security::SecurityConfig;
pub use settings::Settings;
pub use site::SiteLayout;
pub use social::{ProviderApp, ProviderDescriptor, SocialProviders};
