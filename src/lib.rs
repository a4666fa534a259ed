//! # Storefront Testkit
//!
//! Dependency-ordered fixture loading for storefront test suites.
//!
//! Fixtures are self-contained loaders of test data. Each declares the
//! fixtures it needs; the manager loads prerequisites first, runs every
//! fixture at most once per session, and shares created values through a
//! named reference repository.
//!
//! ## Feature Flags
//!
//! - `fixtures` (default) - Fixture manager, reference repository, settings
//! - `test` - rstest fixtures, execution log, test logging
//!
//! ## Quick Example
//!
//! ```rust
//! use storefront_testkit::prelude::*;
//!
//! #[derive(Default)]
//! struct TaxRuleFixture;
//!
//! impl Fixture for TaxRuleFixture {
//!     fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
//!         references.set("tax.standard", 19_u32);
//!         Ok(())
//!     }
//! }
//!
//! struct ProductFixture;
//!
//! impl Fixture for ProductFixture {
//!     fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
//!         let rate = references.get_as::<u32>("tax.standard")?;
//!         references.set("product.gross_cents", 1000 * (100 + *rate) / 100);
//!         Ok(())
//!     }
//!
//!     fn dependencies(&self) -> Vec<FixtureId> {
//!         vec![FixtureId::of::<TaxRuleFixture>()]
//!     }
//! }
//!
//! let mut manager = FixtureManager::new();
//! manager.register::<TaxRuleFixture>();
//! manager.load_fixture(ProductFixture)?;
//!
//! assert_eq!(*manager.references().get_as::<u32>("product.gross_cents")?, 1190);
//! # Ok::<(), FixtureError>(())
//! ```

#[cfg(feature = "fixtures")]
pub mod fixtures;

// Re-export the fixture core at the crate root
#[cfg(feature = "fixtures")]
pub use storefront_fixtures::{
	Fixture, FixtureError, FixtureId, FixtureManager, FixtureRegistry, FixtureResult,
	FixtureSettings, LoadReport, Reference, ReferenceRepository,
};

#[cfg(feature = "test")]
pub use storefront_test::{ExecutionLog, init_test_logging};

/// Convenience re-exports for common usage.
#[cfg(feature = "fixtures")]
pub mod prelude {
	pub use storefront_fixtures::prelude::*;

	#[cfg(feature = "test")]
	pub use storefront_test::ExecutionLog;
}
