use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr. The default level stays at `warn` so nothing is printed
/// over the interactive screen unless asked for with `RUST_LOG` or `--verbose`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
