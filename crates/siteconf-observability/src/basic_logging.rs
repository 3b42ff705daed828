use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown at `LOG_LEVEL`; everything else stays at `warn`.
const APP_TARGETS: &[&str] = &["siteconf", "siteconf_config", "siteconf_core"];

/// Builds the filter used by every logging setup.
///
/// `RUST_LOG` wins when set. Otherwise `LOG_LEVEL` (default: "info") applies
/// to the SiteConf crates and all other targets are held at `warn`.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        EnvFilter::new(directives(&log_level))
    })
}

fn directives(log_level: &str) -> String {
    let mut directives = vec!["warn".to_string()];
    directives.extend(APP_TARGETS.iter().map(|t| format!("{t}={log_level}")));
    directives.join(",")
}

/// Initialize console logging on stderr.
///
/// Stdout is left untouched so command output (for example a settings dump)
/// can be piped. Calling this more than once is a no-op.
///
/// - **Log Level**: `RUST_LOG`, else `LOG_LEVEL` (default: "info")
/// - **Format**: Compact, with module targets and ANSI colors
pub fn init_basic_console_logging() {
    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(true)
        .with_filter(default_env_filter());

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already set, keeping it");
    }
}
