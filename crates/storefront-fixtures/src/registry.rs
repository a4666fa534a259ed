//! Fixture registry for resolving dependency identities.
//!
//! Dependencies are declared as [`FixtureId`]s. This registry maps each
//! identity to a factory that constructs the fixture, so the manager can turn
//! a declared prerequisite into a runnable fixture without reflection.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{FixtureError, FixtureResult};
use crate::fixture::{Fixture, FixtureId};

/// Type-erased fixture constructor.
pub type FixtureFactory = Arc<dyn Fn() -> Box<dyn Fixture> + Send + Sync>;

/// Registry of fixture factories, keyed by fixture identity.
///
/// Each [`FixtureManager`](crate::FixtureManager) owns its own registry.
///
/// # Example
///
/// ```
/// use storefront_fixtures::prelude::*;
///
/// #[derive(Default)]
/// struct TaxRuleFixture;
///
/// impl Fixture for TaxRuleFixture {
///     fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
///         references.set("tax.standard", 19_u8);
///         Ok(())
///     }
/// }
///
/// let mut registry = FixtureRegistry::new();
/// registry.register::<TaxRuleFixture>();
///
/// assert!(registry.contains(&FixtureId::of::<TaxRuleFixture>()));
/// let fixture = registry.resolve(&FixtureId::of::<TaxRuleFixture>()).unwrap();
/// assert_eq!(fixture.id(), FixtureId::of::<TaxRuleFixture>());
/// ```
#[derive(Default, Clone)]
pub struct FixtureRegistry {
	factories: HashMap<FixtureId, FixtureFactory>,
}

impl FixtureRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a fixture constructed through its `Default` implementation.
	pub fn register<F: Fixture + Default>(&mut self) {
		self.register_with(F::default);
	}

	/// Registers a fixture built by `constructor`.
	///
	/// Use this when the fixture needs collaborators, such as a repository
	/// handle or a shared log.
	pub fn register_with<F, C>(&mut self, constructor: C)
	where
		F: Fixture,
		C: Fn() -> F + Send + Sync + 'static,
	{
		let factory: FixtureFactory =
			Arc::new(move || -> Box<dyn Fixture> { Box::new(constructor()) });
		self.factories.insert(FixtureId::of::<F>(), factory);
	}

	/// Registers an untyped factory for `id`.
	///
	/// The factory output is checked on resolution: a fixture whose own
	/// identity differs from `id` is rejected.
	pub fn register_dyn<C>(&mut self, id: FixtureId, factory: C)
	where
		C: Fn() -> Box<dyn Fixture> + Send + Sync + 'static,
	{
		self.factories.insert(id, Arc::new(factory));
	}

	/// Constructs the fixture registered for `id`.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::InvalidDependency`] if no factory is registered
	/// for `id` or if the factory produces a different fixture type.
	pub fn resolve(&self, id: &FixtureId) -> FixtureResult<Arc<dyn Fixture>> {
		let factory = self
			.factories
			.get(id)
			.ok_or_else(|| FixtureError::InvalidDependency {
				fixture: id.to_string(),
				dependency: id.to_string(),
				reason: "no factory registered for this fixture".to_string(),
			})?;

		let fixture: Arc<dyn Fixture> = Arc::from(factory());
		let produced = fixture.id();
		if produced != *id {
			return Err(FixtureError::InvalidDependency {
				fixture: id.to_string(),
				dependency: id.to_string(),
				reason: format!("factory produced {} instead", produced),
			});
		}
		Ok(fixture)
	}

	/// Checks if a factory is registered for `id`.
	pub fn contains(&self, id: &FixtureId) -> bool {
		self.factories.contains_key(id)
	}

	/// Returns all registered fixture identities.
	pub fn ids(&self) -> Vec<FixtureId> {
		self.factories.keys().copied().collect()
	}

	/// Returns the number of registered factories.
	pub fn len(&self) -> usize {
		self.factories.len()
	}

	/// Returns true if no factories are registered.
	pub fn is_empty(&self) -> bool {
		self.factories.is_empty()
	}

	/// Removes all registered factories.
	pub fn clear(&mut self) {
		self.factories.clear();
	}
}

impl std::fmt::Debug for FixtureRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FixtureRegistry")
			.field("fixtures", &self.ids())
			.finish()
	}
}
