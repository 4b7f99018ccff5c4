use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by punycode and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see why the decoder rejected input:
///   RUST_LOG=punycode=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .with_test_writer()
        .try_init()
        .ok();
}
