//! Error types for fixture loading.
//!
//! This module defines the error types used throughout the storefront-fixtures crate.

use thiserror::Error;

use crate::settings::SettingsError;

/// Errors that can occur while resolving or loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
	/// A fixture was visited again while it was still being resolved.
	#[error("Circular dependency detected for fixture {fixture}: {path}")]
	CircularDependency {
		/// Fixture that closed the cycle.
		fixture: String,
		/// Active resolution path, rendered as `A -> B -> A`.
		path: String,
	},

	/// A declared dependency does not resolve to a usable fixture.
	#[error("Invalid dependency {dependency} declared by {fixture}: {reason}")]
	InvalidDependency {
		/// Fixture declaring the dependency.
		fixture: String,
		/// Dependency identity that could not be resolved.
		dependency: String,
		/// Why the dependency was rejected.
		reason: String,
	},

	/// No reference is stored under the requested name.
	#[error("Reference not found: {0}")]
	ReferenceNotFound(String),

	/// A reference exists but holds a different type than requested.
	#[error("Reference {name} is not of type {expected}")]
	ReferenceTypeMismatch {
		/// Reference name.
		name: String,
		/// Requested type name.
		expected: &'static str,
	},

	/// The dependency chain is deeper than the configured limit.
	#[error("Maximum fixture resolution depth exceeded: {0}")]
	MaxDepthExceeded(usize),

	/// A fixture reported a failure from its own `load`.
	#[error("Load error: {0}")]
	Load(String),

	/// Settings could not be loaded.
	#[error("Settings error: {0}")]
	Settings(#[from] SettingsError),
}

impl FixtureError {
	/// Convenience constructor for fixture-reported failures.
	pub fn load(message: impl Into<String>) -> Self {
		Self::Load(message.into())
	}
}

/// Result type alias for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;
