use tracing_subscriber::EnvFilter;

/// Stderr subscriber with an env-driven filter; info level by default so the
/// run log never mixes into the console rendering on stdout.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
