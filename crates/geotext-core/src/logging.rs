use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,cosmic_text=warn";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a `fmt` subscriber filtered by `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a `fmt` subscriber filtered by `RUST_LOG`, falling back to `fallback`.
pub fn init_with_filter(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .init();
}

/// Same as [`init`] but does not panic when a global subscriber is already set.
///
/// Output goes through the test writer so it is captured per test.
pub fn try_init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_test_writer()
        .try_init()
        .is_ok()
}
