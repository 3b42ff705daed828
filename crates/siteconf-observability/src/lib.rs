//! SiteConf Observability Module
//!
//! Logging setup shared by the SiteConf binaries. Library crates only emit
//! `tracing` events; installing a subscriber is the binary's job.
//!
//! # Features
//!
//! - `file-logging` (default): Adds [`init_file_logging`], which also writes
//!   JSON logs to a daily rolling file
//!
//! # Examples
//!
//! ```no_run
//! use siteconf_observability::init_basic_console_logging;
//!
//! init_basic_console_logging();
//! tracing::info!("ready");
//! ```

pub mod basic_logging;
#[cfg(feature = "file-logging")]
pub mod file_logging;

pub use basic_logging::{default_env_filter, init_basic_console_logging};
#[cfg(feature = "file-logging")]
pub use file_logging::init_file_logging;
