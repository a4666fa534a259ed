//! Dependency ordering for fixture loading.
//!
//! Produces a load sequence in which every fixture follows all of its direct
//! and transitive dependencies, each fixture appearing once. Ordering is a
//! depth-first traversal that tracks the active resolution path, so a cycle is
//! reported as soon as a fixture is re-entered while still being resolved.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{FixtureError, FixtureResult};
use crate::fixture::{Fixture, FixtureId};
use crate::registry::FixtureRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
	/// On the active resolution path.
	Visiting,
	/// Fully resolved and scheduled.
	Visited,
}

/// Computes a dependency-respecting load order.
///
/// Dependencies are resolved from the requested roots first and then from the
/// registry. Without a `max_depth` chains of any length resolve.
pub(crate) struct DependencyResolver<'a> {
	registry: &'a FixtureRegistry,
	roots: IndexMap<FixtureId, Arc<dyn Fixture>>,
	max_depth: Option<usize>,
	states: HashMap<FixtureId, VisitState>,
	path: Vec<FixtureId>,
	order: Vec<Arc<dyn Fixture>>,
}

impl<'a> DependencyResolver<'a> {
	pub(crate) fn new(
		registry: &'a FixtureRegistry,
		roots: &[Arc<dyn Fixture>],
		max_depth: Option<usize>,
	) -> Self {
		let mut indexed = IndexMap::new();
		for root in roots {
			indexed.entry(root.id()).or_insert_with(|| Arc::clone(root));
		}

		Self {
			registry,
			roots: indexed,
			max_depth,
			states: HashMap::new(),
			path: Vec::new(),
			order: Vec::new(),
		}
	}

	/// Orders every requested root together with its transitive dependencies.
	pub(crate) fn resolve(mut self) -> FixtureResult<Vec<Arc<dyn Fixture>>> {
		let roots: Vec<Arc<dyn Fixture>> = self.roots.values().cloned().collect();
		for root in roots {
			self.visit(root)?;
		}
		Ok(self.order)
	}

	fn visit(&mut self, fixture: Arc<dyn Fixture>) -> FixtureResult<()> {
		let id = fixture.id();

		match self.states.get(&id) {
			Some(VisitState::Visiting) => return Err(self.cycle_error(id)),
			Some(VisitState::Visited) => return Ok(()),
			None => {}
		}

		if self.max_depth.is_some_and(|max| self.path.len() >= max) {
			return Err(FixtureError::MaxDepthExceeded(self.path.len() + 1));
		}

		tracing::trace!(fixture = %id, depth = self.path.len(), "resolving fixture");
		self.states.insert(id, VisitState::Visiting);
		self.path.push(id);

		for dependency in fixture.dependencies() {
			match self.states.get(&dependency) {
				Some(VisitState::Visited) => continue,
				Some(VisitState::Visiting) => return Err(self.cycle_error(dependency)),
				None => {}
			}
			let resolved = self.lookup(&id, &dependency)?;
			self.visit(resolved)?;
		}

		self.path.pop();
		self.states.insert(id, VisitState::Visited);
		self.order.push(fixture);
		Ok(())
	}

	fn lookup(
		&self,
		declared_by: &FixtureId,
		dependency: &FixtureId,
	) -> FixtureResult<Arc<dyn Fixture>> {
		if let Some(root) = self.roots.get(dependency) {
			return Ok(Arc::clone(root));
		}

		self.registry
			.resolve(dependency)
			.map_err(|error| match error {
				FixtureError::InvalidDependency { reason, .. } => FixtureError::InvalidDependency {
					fixture: declared_by.to_string(),
					dependency: dependency.to_string(),
					reason,
				},
				other => other,
			})
	}

	fn cycle_error(&self, id: FixtureId) -> FixtureError {
		let start = self.path.iter().position(|entry| *entry == id).unwrap_or(0);
		let mut cycle: Vec<&str> = self.path[start..]
			.iter()
			.map(FixtureId::short_name)
			.collect();
		cycle.push(id.short_name());

		FixtureError::CircularDependency {
			fixture: id.to_string(),
			path: cycle.join(" -> "),
		}
	}
}
