use tracing_subscriber::{fmt, EnvFilter};

/// Installs the stdout subscriber. `RUST_LOG` overrides `log_level`.
///
/// Calling this twice leaves the first subscriber in place.
pub fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rate_display={log_level}")));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}
