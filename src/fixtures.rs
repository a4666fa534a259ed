//! Fixture loading module.
//!
//! This module provides the fixture manager, the reference repository and
//! fixture settings.
//!
//! # Examples
//!
//! ```rust
//! use storefront_testkit::fixtures::{FixtureManager, FixtureSettings};
//!
//! let manager = FixtureManager::with_settings(FixtureSettings::default());
//! assert!(manager.loaded().is_empty());
//! ```

#[cfg(feature = "fixtures")]
pub use storefront_fixtures::*;
