//! Tracing setup for the service: one fmt layer written to stdout and appended to a log file.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: `info` everywhere, plus the per-request
/// spans and events that `tower_http`'s trace layer emits at `debug`.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Local time with milliseconds, e.g. `2024-05-01T09:30:12.345`.
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

/// Parses comma-separated filter directives such as `info,tower_http=debug`.
pub fn log_filter(directives: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter: {}", directives))
}

/// Installs the global subscriber.
///
/// Events pass through `directives` (see [`log_filter`]) and go to stdout and the
/// log file, plain text without ANSI codes. Fails if the file cannot be opened, the
/// directives do not parse, or a subscriber is already installed.
pub fn init_tracing(log_file_path: &str, directives: &str) -> anyhow::Result<()> {
    let filter = log_filter(directives)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .with_context(|| format!("Failed to open log file {}", log_file_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stdout.and(Arc::new(file)))
        .with_timer(LocalTimestamp)
        .with_target(true)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
