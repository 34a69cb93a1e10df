use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::TourError;

/// Installs the stderr diagnostics subscriber at `level`.
///
/// The filter is built from the configured level only; `RUST_LOG` is not read.
/// Calling this again after a subscriber is installed is a no-op.
pub fn init(level: &str) -> Result<(), TourError> {
    let filter = EnvFilter::try_new(level)
        .map_err(|err| TourError::invalid_config("log_level", err.to_string()))?;

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_thread_names(true),
        )
        .try_init();

    Ok(())
}
