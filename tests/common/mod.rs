//! Shared helpers for integration tests.

/// Install a test subscriber once; later calls are no-ops.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("fakegen=debug,fakegen_generator=debug")
        .with_test_writer()
        .try_init()
        .ok(); // Ignore if already initialized
}
