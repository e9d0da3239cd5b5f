//! Test utilities for yarn-deps
//!
//! Fixtures for lockfiles and `yarn list` output, plus a logging initialiser
//! that is safe to call from every test.
//!
//! # Example
//!
//! ```rust,no_run
//! use yarn_deps::lockfile::Lockfile;
//! use yarn_deps::test_utils::{LockfileFixture, init_test_logging};
//!
//! init_test_logging(None);
//! let lockfile = Lockfile::parse(&LockfileFixture::two_packages().content).unwrap();
//! assert_eq!(lockfile.len(), 2);
//! ```

pub mod fixtures;

pub use fixtures::{LockfileFixture, TreeFixture};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. Uses `level` if given, otherwise
/// `RUST_LOG` if set, otherwise leaves logging off.
///
/// ```bash
/// RUST_LOG=yarn_deps=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
