//! # Node Services Test Suite
//!
//! Unified test crate for cross-crate integration tests.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-crate flows
//!     └── permissioning.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p node-tests
//!
//! # By category
//! cargo test -p node-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the test tracing subscriber once per process.
///
/// Log output is a diagnostic side channel only; tests assert that verdicts
/// are identical with and without a subscriber installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;

        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}
