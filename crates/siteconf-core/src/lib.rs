//! # SiteConf Core
//!
//! Core types, errors, and environment helpers for SiteConf.
//!
//! This crate provides the building blocks every settings section is made of:
//!
//! - [`errors`]: The [`ConfigError`] type surfaced while loading settings
//! - [`hosts`]: Host/origin list parsing for allow-list style settings
//! - [`env`]: An environment snapshot with typed accessors
//! - [`secret`]: A string wrapper that never prints its value
//!
//! # Example
//!
//! ```
//! use siteconf_core::{Env, EnvSource, parse_csv};
//!
//! let env: Env = [("ALLOWED_HOSTS", "example.com, www.example.com")]
//!     .into_iter()
//!     .collect();
//!
//! let hosts = env.get_list("ALLOWED_HOSTS", "localhost");
//! assert_eq!(hosts, vec!["example.com", "www.example.com"]);
//! assert_eq!(parse_csv("a,,b"), vec!["a", "b"]);
//! ```

pub mod env;
pub mod errors;
pub mod hosts;
pub mod secret;

// Re-export commonly used types at crate root
pub use env::{Env, EnvSource, Environment, FromEnvValue};
pub use errors::ConfigError;
pub use hosts::{DEFAULT_SEPARATOR, parse_csv, parse_host_list};
pub use secret::Secret;
