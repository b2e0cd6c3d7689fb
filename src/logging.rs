use std::{fs::OpenOptions, io, path::Path, sync::Arc};

use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Sends logs to stderr, filtered by `RUST_LOG` (default `warn`) so they stay
/// out of the menu, and optionally appends DEBUG logs to `log_file`.
pub fn setup_logging(log_file: Option<&Path>) -> io::Result<()> {
    let stderr_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(stderr_filter);

    let file_log = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry().with(stderr_log).with(file_log).init();
    Ok(())
}
