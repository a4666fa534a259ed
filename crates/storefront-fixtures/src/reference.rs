//! Named registry of values produced while loading fixtures.
//!
//! Fixtures publish the records they create under string names so later
//! fixtures and tests can look them up without passing state explicitly.

use std::any::Any;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{FixtureError, FixtureResult};

/// A stored reference value.
pub type Reference = Arc<dyn Any + Send + Sync>;

/// String-keyed store for arbitrary values.
///
/// Any value can be stored, including `()`, `None`, `0`, `false` or an empty
/// collection; such values count as present. Setting an existing name
/// overwrites it.
///
/// # Examples
///
/// ```
/// use storefront_fixtures::ReferenceRepository;
///
/// let mut references = ReferenceRepository::new();
/// references.set("customer.email", "jane@example.com".to_string());
///
/// assert!(references.has("customer.email"));
/// let email = references.get_as::<String>("customer.email").unwrap();
/// assert_eq!(email.as_str(), "jane@example.com");
/// ```
#[derive(Default, Clone)]
pub struct ReferenceRepository {
	entries: IndexMap<String, Reference>,
}

impl ReferenceRepository {
	/// Creates an empty repository.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `value` under `name`, replacing any previous entry.
	pub fn set<T: Any + Send + Sync>(&mut self, name: impl Into<String>, value: T) {
		self.set_shared(name, Arc::new(value));
	}

	/// Stores an already shared value under `name` without wrapping it again.
	pub fn set_shared(&mut self, name: impl Into<String>, value: Reference) {
		let name = name.into();
		tracing::trace!(reference = %name, "storing fixture reference");
		self.entries.insert(name, value);
	}

	/// Returns the value stored under `name`.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::ReferenceNotFound`] if nothing is stored under `name`.
	pub fn get(&self, name: &str) -> FixtureResult<Reference> {
		self.entries
			.get(name)
			.cloned()
			.ok_or_else(|| FixtureError::ReferenceNotFound(name.to_string()))
	}

	/// Returns the value stored under `name` as a `T`.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::ReferenceNotFound`] if nothing is stored under
	/// `name`, and [`FixtureError::ReferenceTypeMismatch`] if the stored value
	/// is not a `T`.
	pub fn get_as<T: Any + Send + Sync>(&self, name: &str) -> FixtureResult<Arc<T>> {
		self.get(name)?
			.downcast::<T>()
			.map_err(|_| FixtureError::ReferenceTypeMismatch {
				name: name.to_string(),
				expected: std::any::type_name::<T>(),
			})
	}

	/// Returns true if a value is stored under `name`.
	pub fn has(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Returns a snapshot of every stored reference.
	///
	/// Later writes to the repository do not affect the returned map.
	pub fn get_all(&self) -> IndexMap<String, Reference> {
		self.entries.clone()
	}

	/// Names of all stored references, in insertion order.
	pub fn names(&self) -> Vec<&str> {
		self.entries.keys().map(String::as_str).collect()
	}

	/// Removes every stored reference.
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Returns the number of stored references.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no references are stored.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl std::fmt::Debug for ReferenceRepository {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ReferenceRepository")
			.field("names", &self.names())
			.finish()
	}
}
