//! Fixture manager.
//!
//! The manager owns a loading session: the shared [`ReferenceRepository`],
//! the set of fixtures already executed, and the registry used to resolve
//! declared dependencies.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::error::FixtureResult;
use crate::fixture::{Fixture, FixtureId};
use crate::reference::ReferenceRepository;
use crate::registry::FixtureRegistry;
use crate::resolver::DependencyResolver;
use crate::settings::FixtureSettings;

/// Outcome of a [`FixtureManager::load`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
	/// Fixtures executed by this call, in execution order.
	pub executed: Vec<FixtureId>,
	/// Fixtures skipped because an earlier call already loaded them.
	pub skipped: Vec<FixtureId>,
}

impl LoadReport {
	/// Number of fixtures executed by this call.
	pub fn executed_count(&self) -> usize {
		self.executed.len()
	}

	/// Returns true if the call neither executed nor skipped anything.
	pub fn is_empty(&self) -> bool {
		self.executed.is_empty() && self.skipped.is_empty()
	}
}

/// Loads fixtures in dependency order, each at most once per session.
///
/// # Example
///
/// ```
/// use storefront_fixtures::prelude::*;
///
/// #[derive(Default)]
/// struct CustomerGroupFixture;
///
/// impl Fixture for CustomerGroupFixture {
///     fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
///         references.set("customer_group.net", "B2B".to_string());
///         Ok(())
///     }
/// }
///
/// struct CustomerFixture;
///
/// impl Fixture for CustomerFixture {
///     fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
///         let group = references.get_as::<String>("customer_group.net")?;
///         references.set("customer.b2b", format!("jane ({})", group));
///         Ok(())
///     }
///
///     fn dependencies(&self) -> Vec<FixtureId> {
///         vec![FixtureId::of::<CustomerGroupFixture>()]
///     }
/// }
///
/// let mut manager = FixtureManager::new();
/// manager.register::<CustomerGroupFixture>();
///
/// let report = manager.load_fixture(CustomerFixture).unwrap();
/// assert_eq!(report.executed_count(), 2);
/// assert!(manager.references().has("customer.b2b"));
/// ```
#[derive(Debug, Default)]
pub struct FixtureManager {
	settings: FixtureSettings,
	registry: FixtureRegistry,
	references: ReferenceRepository,
	loaded: IndexSet<FixtureId>,
}

impl FixtureManager {
	/// Creates a manager with default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a manager with the given settings.
	pub fn with_settings(settings: FixtureSettings) -> Self {
		Self {
			settings,
			..Self::default()
		}
	}

	/// Creates a manager using an existing registry.
	pub fn with_registry(mut self, registry: FixtureRegistry) -> Self {
		self.registry = registry;
		self
	}

	/// Returns the active settings.
	pub fn settings(&self) -> &FixtureSettings {
		&self.settings
	}

	/// Returns the fixture registry.
	pub fn registry(&self) -> &FixtureRegistry {
		&self.registry
	}

	/// Returns the fixture registry for modification.
	pub fn registry_mut(&mut self) -> &mut FixtureRegistry {
		&mut self.registry
	}

	/// Registers a fixture constructed through its `Default` implementation.
	pub fn register<F: Fixture + Default>(&mut self) -> &mut Self {
		self.registry.register::<F>();
		self
	}

	/// Registers a fixture built by `constructor`.
	pub fn register_with<F, C>(&mut self, constructor: C) -> &mut Self
	where
		F: Fixture,
		C: Fn() -> F + Send + Sync + 'static,
	{
		self.registry.register_with(constructor);
		self
	}

	/// Loads a single fixture and its dependencies.
	pub fn load_fixture<F: Fixture>(&mut self, fixture: F) -> FixtureResult<LoadReport> {
		let root: Arc<dyn Fixture> = Arc::new(fixture);
		self.run(vec![root])
	}

	/// Loads the given fixtures and their dependencies.
	///
	/// The full load order is computed before anything executes, so an
	/// ordering error leaves the session untouched. Fixtures already loaded in
	/// this session are skipped.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::CircularDependency`](crate::FixtureError::CircularDependency),
	/// [`FixtureError::InvalidDependency`](crate::FixtureError::InvalidDependency) or
	/// [`FixtureError::MaxDepthExceeded`](crate::FixtureError::MaxDepthExceeded) when ordering
	/// fails, and any error returned by a fixture's `load`.
	pub fn load<I>(&mut self, fixtures: I) -> FixtureResult<LoadReport>
	where
		I: IntoIterator<Item = Box<dyn Fixture>>,
	{
		self.run(fixtures.into_iter().map(Arc::<dyn Fixture>::from).collect())
	}

	/// Loads fixtures by identity, constructing each root through the registry.
	pub fn load_registered(&mut self, ids: &[FixtureId]) -> FixtureResult<LoadReport> {
		let roots = ids
			.iter()
			.map(|id| self.registry.resolve(id))
			.collect::<FixtureResult<Vec<_>>>()?;
		self.run(roots)
	}

	/// Computes the load order for `fixtures` without executing anything.
	pub fn plan<I>(&self, fixtures: I) -> FixtureResult<Vec<FixtureId>>
	where
		I: IntoIterator<Item = Box<dyn Fixture>>,
	{
		let roots: Vec<Arc<dyn Fixture>> = fixtures
			.into_iter()
			.map(Arc::<dyn Fixture>::from)
			.collect();
		let order = self.order(&roots)?;
		Ok(order.iter().map(|fixture| fixture.id()).collect())
	}

	fn order(&self, roots: &[Arc<dyn Fixture>]) -> FixtureResult<Vec<Arc<dyn Fixture>>> {
		DependencyResolver::new(&self.registry, roots, self.settings.max_resolution_depth)
			.resolve()
	}

	fn run(&mut self, roots: Vec<Arc<dyn Fixture>>) -> FixtureResult<LoadReport> {
		let sequence = self.order(&roots)?;
		let mut report = LoadReport::default();

		for fixture in sequence {
			let id = fixture.id();
			if self.loaded.contains(&id) {
				tracing::debug!(fixture = %id, "fixture already loaded, skipping");
				report.skipped.push(id);
				continue;
			}

			tracing::debug!(fixture = %id, "loading fixture");
			if let Err(error) = fixture.load(&mut self.references) {
				tracing::warn!(fixture = %id, error = %error, "fixture failed to load");
				return Err(error);
			}
			self.loaded.insert(id);
			report.executed.push(id);
		}

		tracing::info!(
			executed = report.executed.len(),
			skipped = report.skipped.len(),
			"fixtures loaded"
		);
		Ok(report)
	}

	/// Returns the session's reference repository.
	pub fn references(&self) -> &ReferenceRepository {
		&self.references
	}

	/// Returns the session's reference repository for modification.
	pub fn references_mut(&mut self) -> &mut ReferenceRepository {
		&mut self.references
	}

	/// Returns true if `id` was loaded in this session.
	pub fn is_loaded(&self, id: &FixtureId) -> bool {
		self.loaded.contains(id)
	}

	/// Fixtures loaded in this session, in execution order.
	pub fn loaded(&self) -> Vec<FixtureId> {
		self.loaded.iter().copied().collect()
	}

	/// Ends the session: forgets loaded fixtures and clears all references.
	///
	/// Registered factories are kept.
	pub fn clear(&mut self) {
		tracing::debug!(loaded = self.loaded.len(), "clearing fixture session");
		self.loaded.clear();
		self.references.clear();
	}
}
