//! Logging and tracing bootstrap.

use tracing_subscriber::EnvFilter;

use bookmart_kernel::settings::{LogFormat, TelemetrySettings};

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once; later calls are no-ops, which keeps test
/// binaries from panicking when several tests initialize logging.
pub fn init(settings: &TelemetrySettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match settings.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };

    if result.is_ok() {
        tracing::debug!(format = ?settings.log_format, "telemetry initialized");
    }
}
