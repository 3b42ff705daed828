use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::basic_logging::default_env_filter;

/// Console logging plus a daily rolling JSON log under `log_dir`.
///
/// The returned guard flushes the file writer on drop; keep it alive for as
/// long as the process runs.
///
/// # Errors
///
/// Fails if `log_dir` cannot be created.
pub fn init_file_logging(log_dir: &Path) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(default_env_filter());

    let json_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "siteconf.json");
    let (json_writer, guard) = tracing_appender::non_blocking(json_appender);

    let json_layer = fmt::layer()
        .json()
        .with_writer(json_writer)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("info"));

    if tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already set, keeping it");
    }

    Ok(guard)
}
