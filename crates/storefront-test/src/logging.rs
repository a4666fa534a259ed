//! Log output for fixture-loading tests.
//!
//! `storefront-fixtures` reports resolution and execution through `tracing`
//! events, which reach the `log` facade. This module installs `env_logger`
//! in test mode so those events show up in captured test output.

use std::sync::Once;

use env_logger::Env;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "storefront_fixtures=info";

static INIT: Once = Once::new();

/// Installs the test logger once per process.
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`], e.g.
/// `RUST_LOG=storefront_fixtures=trace` to see every reference write. The
/// `fixture_manager` rstest fixtures call this, so tests using them need not.
///
/// # Examples
///
/// ```
/// use storefront_test::logging::init_test_logging;
///
/// init_test_logging();
/// init_test_logging();
/// ```
pub fn init_test_logging() {
	INIT.call_once(|| {
		let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
			.is_test(true)
			.try_init();
	});
}
