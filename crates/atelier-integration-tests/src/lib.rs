//! Integration test crate for the Atelier policy engine.
//!
//! This crate has no library logic — it only contains integration tests
//! that exercise end-to-end flows across multiple workspace crates.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p atelier-integration-tests
//! ```

/// Initialize a tracing subscriber for test output.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
