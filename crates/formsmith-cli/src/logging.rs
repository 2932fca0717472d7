use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber on stderr, honoring `RUST_LOG`.
///
/// Defaults to `info` when no filter is configured. Stdout stays reserved
/// for command output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
