//! # Storefront Test
//!
//! Testing helpers for suites built on `storefront-fixtures`.
//!
//! ## Features
//!
//! - **[`fixtures`]**: `rstest` fixtures handing out fresh managers, repositories and logs
//! - **[`ExecutionLog`]**: Shared record of fixture executions for order assertions
//! - **[`logging`]**: One-time `env_logger` initialisation for tests
//!
//! ## Quick Start
//!
//! ```rust
//! use rstest::*;
//! use storefront_fixtures::prelude::*;
//! use storefront_test::ExecutionLog;
//! use storefront_test::fixtures::{execution_log, fixture_manager};
//!
//! struct CategoryFixture {
//!     log: ExecutionLog,
//! }
//!
//! impl Fixture for CategoryFixture {
//!     fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
//!         self.log.record("CategoryFixture");
//!         references.set("category.root", "Home".to_string());
//!         Ok(())
//!     }
//! }
//!
//! #[rstest]
//! fn test_category(mut fixture_manager: FixtureManager, execution_log: ExecutionLog) {
//!     fixture_manager
//!         .load_fixture(CategoryFixture { log: execution_log.clone() })
//!         .unwrap();
//!     assert_eq!(execution_log.count("CategoryFixture"), 1);
//! }
//! ```

pub mod fixtures;
pub mod log;
pub mod logging;

pub use log::ExecutionLog;
pub use logging::init_test_logging;
