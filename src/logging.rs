use tracing_subscriber::EnvFilter;

/// Initialise logging at `info`, or `debug` when enabled in the settings.
/// `RUST_LOG` is only honoured with debug logging on, so a stray variable in
/// the host's environment cannot flood the output.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
