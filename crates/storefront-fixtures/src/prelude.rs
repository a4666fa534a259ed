//! Convenience re-exports for common usage.
//!
//! This module provides a single import for the most commonly used items
//! from the storefront-fixtures crate.
//!
//! # Example
//!
//! ```
//! use storefront_fixtures::prelude::*;
//!
//! let mut manager = FixtureManager::new();
//! manager.references_mut().set("sales_channel.default", "Storefront".to_string());
//! assert!(manager.references().has("sales_channel.default"));
//! ```

// Error types
pub use crate::error::{FixtureError, FixtureResult};

// Fixture types
pub use crate::fixture::{Fixture, FixtureId};

// Session types
pub use crate::manager::{FixtureManager, LoadReport};
pub use crate::reference::{Reference, ReferenceRepository};
pub use crate::registry::FixtureRegistry;

// Settings
pub use crate::settings::FixtureSettings;
