use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing.
///
/// `RUST_LOG` wins over `default_filter`. If `TUNEFEED_LOG` is set to a
/// file path, logs go to `{path}.{timestamp}.{pid}` so that concurrent
/// runs do not clobber each other; otherwise they go to stderr.
///
/// Safe to call more than once: later calls are ignored.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if let Ok(log_path) = std::env::var("TUNEFEED_LOG") {
        let pid = std::process::id();
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

        match std::fs::File::create(&unique_path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true);
                let _ = tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .try_init();
                return;
            }
            Err(err) => {
                eprintln!("Warning: Failed to create log file {}: {}", unique_path, err);
            }
        }
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
