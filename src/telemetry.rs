use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogLevel;

/// Installs the global tracing subscriber
///
/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn init_tracing(level: LogLevel) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(level, rust_log.as_deref())?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;

    Ok(())
}

/// Resolves the active filter from `RUST_LOG` directives or the configured level
///
/// A blank `RUST_LOG` counts as unset. Invalid directives are an error rather
/// than silently falling back.
pub(crate) fn build_filter(level: LogLevel, rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
    let filter = match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => EnvFilter::try_new(directives)
            .map_err(|e| anyhow::anyhow!("Invalid RUST_LOG directives '{}': {}", directives, e))?,
        _ => EnvFilter::try_new(level.as_filter_directive())?,
    };
    Ok(filter)
}
