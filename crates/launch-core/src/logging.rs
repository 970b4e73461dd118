use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `LAUNCH_LOG`, then `RUST_LOG`, then `info`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = std::env::var("LAUNCH_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".into());
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}
