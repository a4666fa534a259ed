//! Fixture loading for storefront test suites.
//!
//! This crate provides the data-loading core used by storefront tests:
//!
//! - **Fixtures**: Self-contained loaders of test data with declared prerequisites
//! - **Reference Repository**: Named values shared between fixtures and tests
//! - **Dependency Resolution**: Prerequisites load first, each fixture once per session
//!
//! # Quick Start
//!
//! ```
//! use storefront_fixtures::prelude::*;
//!
//! #[derive(Default)]
//! struct ProductFixture;
//!
//! impl Fixture for ProductFixture {
//!     fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
//!         references.set("product.sku", "SW-1000".to_string());
//!         Ok(())
//!     }
//! }
//!
//! struct OrderFixture;
//!
//! impl Fixture for OrderFixture {
//!     fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
//!         let sku = references.get_as::<String>("product.sku")?;
//!         references.set("order.line_items", vec![sku.to_string()]);
//!         Ok(())
//!     }
//!
//!     fn dependencies(&self) -> Vec<FixtureId> {
//!         vec![FixtureId::of::<ProductFixture>()]
//!     }
//! }
//!
//! let mut manager = FixtureManager::new();
//! manager.register::<ProductFixture>();
//! manager.load_fixture(OrderFixture)?;
//!
//! let items = manager.references().get_as::<Vec<String>>("order.line_items")?;
//! assert_eq!(items.as_slice(), ["SW-1000"]);
//! # Ok::<(), FixtureError>(())
//! ```
//!
//! # Architecture
//!
//! - [`Fixture`] - Fixture unit trait, identified by its concrete type ([`FixtureId`])
//! - [`ReferenceRepository`] - String-keyed store for values produced by fixtures
//! - [`FixtureRegistry`] - Factories turning dependency identities into fixtures
//! - [`FixtureManager`] - Session owner: ordering, execution, loaded-set, references
//! - [`FixtureSettings`] - Settings from defaults, TOML or environment

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod fixture;
pub mod manager;
pub mod prelude;
pub mod reference;
pub mod registry;
mod resolver;
pub mod settings;

// Re-export commonly used types at crate root
pub use error::{FixtureError, FixtureResult};
pub use fixture::{Fixture, FixtureId};
pub use manager::{FixtureManager, LoadReport};
pub use reference::{Reference, ReferenceRepository};
pub use registry::{FixtureFactory, FixtureRegistry};
pub use settings::{FixtureSettings, SettingsError};
