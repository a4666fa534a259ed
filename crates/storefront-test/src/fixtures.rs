//! rstest fixtures for fixture-loading tests
//!
//! Each fixture hands out a fresh value, so tests never share a session.

use rstest::*;
use storefront_fixtures::{FixtureManager, FixtureSettings, ReferenceRepository};

use crate::log::ExecutionLog;
use crate::logging::init_test_logging;

/// Fixture providing an empty fixture manager with default settings
///
/// Test logging is initialised as a side effect.
///
/// # Examples
///
/// ```rust
/// use storefront_test::fixtures::fixture_manager;
/// use storefront_fixtures::FixtureManager;
/// use rstest::*;
///
/// #[rstest]
/// fn test_session_starts_empty(fixture_manager: FixtureManager) {
///     assert!(fixture_manager.loaded().is_empty());
/// }
/// ```
#[fixture]
pub fn fixture_manager() -> FixtureManager {
	init_test_logging();
	FixtureManager::new()
}

/// Fixture providing a fixture manager built from explicit settings
///
/// Defaults to [`FixtureSettings::default`]; override with
/// `#[with(FixtureSettings { .. })]`.
#[fixture]
pub fn configured_fixture_manager(
	#[default(FixtureSettings::default())] settings: FixtureSettings,
) -> FixtureManager {
	init_test_logging();
	FixtureManager::with_settings(settings)
}

/// Fixture providing an empty reference repository
#[fixture]
pub fn reference_repository() -> ReferenceRepository {
	ReferenceRepository::new()
}

/// Fixture providing an empty execution log
#[fixture]
pub fn execution_log() -> ExecutionLog {
	ExecutionLog::new()
}
