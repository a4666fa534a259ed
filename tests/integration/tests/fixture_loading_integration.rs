//! Fixture loading integration tests
//!
//! Tests load ordering, once-per-session execution, cycle and invalid
//! dependency detection, and reference repository behaviour through a
//! `FixtureManager`.

use rstest::rstest;
use storefront_fixtures::prelude::*;
use storefront_test::ExecutionLog;
use storefront_test::fixtures::{execution_log, fixture_manager};

struct Dep {
	log: ExecutionLog,
}

impl Fixture for Dep {
	fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
		self.log.record("Dep");
		references.set("a", 1_i64);
		Ok(())
	}
}

struct Root {
	log: ExecutionLog,
}

impl Fixture for Root {
	fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
		self.log.record("Root");
		let a = references.get_as::<i64>("a")?;
		references.set("b", *a + 1);
		Ok(())
	}

	fn dependencies(&self) -> Vec<FixtureId> {
		vec![FixtureId::of::<Dep>()]
	}
}

struct Shared {
	log: ExecutionLog,
}

impl Fixture for Shared {
	fn load(&self, _references: &mut ReferenceRepository) -> FixtureResult<()> {
		self.log.record("Shared");
		Ok(())
	}
}

struct R1 {
	log: ExecutionLog,
}

impl Fixture for R1 {
	fn load(&self, _references: &mut ReferenceRepository) -> FixtureResult<()> {
		self.log.record("R1");
		Ok(())
	}

	fn dependencies(&self) -> Vec<FixtureId> {
		vec![FixtureId::of::<Shared>()]
	}
}

struct R2 {
	log: ExecutionLog,
}

impl Fixture for R2 {
	fn load(&self, _references: &mut ReferenceRepository) -> FixtureResult<()> {
		self.log.record("R2");
		Ok(())
	}

	fn dependencies(&self) -> Vec<FixtureId> {
		vec![FixtureId::of::<Shared>()]
	}
}

#[derive(Default)]
struct SelfCycle;

impl Fixture for SelfCycle {
	fn load(&self, _references: &mut ReferenceRepository) -> FixtureResult<()> {
		Ok(())
	}

	fn dependencies(&self) -> Vec<FixtureId> {
		vec![FixtureId::of::<SelfCycle>()]
	}
}

#[derive(Default)]
struct CycleA;

impl Fixture for CycleA {
	fn load(&self, _references: &mut ReferenceRepository) -> FixtureResult<()> {
		Ok(())
	}

	fn dependencies(&self) -> Vec<FixtureId> {
		vec![FixtureId::of::<CycleB>()]
	}
}

#[derive(Default)]
struct CycleB;

impl Fixture for CycleB {
	fn load(&self, _references: &mut ReferenceRepository) -> FixtureResult<()> {
		Ok(())
	}

	fn dependencies(&self) -> Vec<FixtureId> {
		vec![FixtureId::of::<CycleA>()]
	}
}

/// Not a fixture; used as a dependency identity that cannot resolve.
struct NotAFixture;

struct Dangling;

impl Fixture for Dangling {
	fn load(&self, _references: &mut ReferenceRepository) -> FixtureResult<()> {
		Ok(())
	}

	fn dependencies(&self) -> Vec<FixtureId> {
		vec![FixtureId::of::<NotAFixture>()]
	}
}

fn register_logged(manager: &mut FixtureManager, log: &ExecutionLog) {
	let dep_log = log.clone();
	manager.register_with(move || Dep {
		log: dep_log.clone(),
	});
	let shared_log = log.clone();
	manager.register_with(move || Shared {
		log: shared_log.clone(),
	});
}

/// Test: Dep runs before Root and both references end up in the repository
#[rstest]
fn test_dependency_loaded_before_root(
	mut fixture_manager: FixtureManager,
	execution_log: ExecutionLog,
) {
	register_logged(&mut fixture_manager, &execution_log);

	fixture_manager
		.load_fixture(Root {
			log: execution_log.clone(),
		})
		.unwrap();

	assert_eq!(execution_log.entries(), vec!["Dep", "Root"]);

	let all = fixture_manager.references().get_all();
	assert_eq!(all.len(), 2);
	assert_eq!(all["a"].downcast_ref::<i64>(), Some(&1));
	assert_eq!(all["b"].downcast_ref::<i64>(), Some(&2));
}

/// Test: Two roots sharing a dependency execute it once, before both
#[rstest]
#[case::r1_first(true)]
#[case::r2_first(false)]
fn test_shared_dependency_executes_once(
	mut fixture_manager: FixtureManager,
	execution_log: ExecutionLog,
	#[case] r1_first: bool,
) {
	register_logged(&mut fixture_manager, &execution_log);

	let r1: Box<dyn Fixture> = Box::new(R1 {
		log: execution_log.clone(),
	});
	let r2: Box<dyn Fixture> = Box::new(R2 {
		log: execution_log.clone(),
	});
	let roots = if r1_first { vec![r1, r2] } else { vec![r2, r1] };

	let report = fixture_manager.load(roots).unwrap();

	assert_eq!(report.executed_count(), 3);
	assert_eq!(execution_log.count("Shared"), 1);
	assert!(execution_log.ran_before("Shared", "R1"));
	assert!(execution_log.ran_before("Shared", "R2"));
}

/// Test: Overlapping load calls execute each fixture once across the session
#[rstest]
fn test_overlapping_loads_execute_once(
	mut fixture_manager: FixtureManager,
	execution_log: ExecutionLog,
) {
	register_logged(&mut fixture_manager, &execution_log);

	fixture_manager
		.load_fixture(R1 {
			log: execution_log.clone(),
		})
		.unwrap();
	let report = fixture_manager
		.load(vec![
			Box::new(R1 {
				log: execution_log.clone(),
			}) as Box<dyn Fixture>,
			Box::new(R2 {
				log: execution_log.clone(),
			}),
		])
		.unwrap();

	assert_eq!(execution_log.entries(), vec!["Shared", "R1", "R2"]);
	assert_eq!(report.executed, vec![FixtureId::of::<R2>()]);
	assert_eq!(
		report.skipped,
		vec![FixtureId::of::<Shared>(), FixtureId::of::<R1>()]
	);
}

/// Test: clear() starts a new session in which fixtures run again
#[rstest]
fn test_clear_reexecutes(mut fixture_manager: FixtureManager, execution_log: ExecutionLog) {
	register_logged(&mut fixture_manager, &execution_log);

	fixture_manager
		.load_fixture(Root {
			log: execution_log.clone(),
		})
		.unwrap();
	fixture_manager.clear();

	assert!(!fixture_manager.references().has("a"));
	assert!(!fixture_manager.is_loaded(&FixtureId::of::<Root>()));

	fixture_manager
		.load_fixture(Root {
			log: execution_log.clone(),
		})
		.unwrap();

	assert_eq!(execution_log.entries(), vec!["Dep", "Root", "Dep", "Root"]);
	assert_eq!(
		*fixture_manager.references().get_as::<i64>("b").unwrap(),
		2
	);
}

/// Test: A fixture depending on itself is a cycle
#[rstest]
fn test_self_dependency_fails(mut fixture_manager: FixtureManager) {
	fixture_manager.register::<SelfCycle>();

	let result = fixture_manager.load_fixture(SelfCycle);

	assert!(matches!(
		result,
		Err(FixtureError::CircularDependency { .. })
	));
	assert!(fixture_manager.loaded().is_empty());
}

/// Test: A -> B -> A is a cycle and nothing of the batch executes
#[rstest]
fn test_mutual_dependency_fails(
	mut fixture_manager: FixtureManager,
	execution_log: ExecutionLog,
) {
	register_logged(&mut fixture_manager, &execution_log);
	fixture_manager.register::<CycleA>().register::<CycleB>();

	let result = fixture_manager.load(vec![
		Box::new(Root {
			log: execution_log.clone(),
		}) as Box<dyn Fixture>,
		Box::new(CycleA),
	]);

	match result {
		Err(FixtureError::CircularDependency { fixture, path }) => {
			assert_eq!(fixture, FixtureId::of::<CycleA>().to_string());
			assert_eq!(path, "CycleA -> CycleB -> CycleA");
		}
		other => panic!("expected a circular dependency, got {:?}", other),
	}
	assert!(execution_log.is_empty());
}

/// Test: Earlier sessions survive a failing batch
#[rstest]
fn test_cycle_keeps_previously_loaded(
	mut fixture_manager: FixtureManager,
	execution_log: ExecutionLog,
) {
	register_logged(&mut fixture_manager, &execution_log);
	fixture_manager.register::<CycleA>().register::<CycleB>();

	fixture_manager
		.load_fixture(Root {
			log: execution_log.clone(),
		})
		.unwrap();
	let result = fixture_manager.load_fixture(CycleB);

	assert!(result.is_err());
	assert!(fixture_manager.is_loaded(&FixtureId::of::<Root>()));
	assert!(fixture_manager.references().has("b"));
}

/// Test: A dependency identity without a fixture behind it is invalid
#[rstest]
fn test_invalid_dependency(mut fixture_manager: FixtureManager) {
	let result = fixture_manager.load_fixture(Dangling);

	match result {
		Err(FixtureError::InvalidDependency {
			fixture,
			dependency,
			..
		}) => {
			assert_eq!(fixture, FixtureId::of::<Dangling>().to_string());
			assert_eq!(dependency, FixtureId::of::<NotAFixture>().to_string());
		}
		other => panic!("expected an invalid dependency, got {:?}", other),
	}
}

/// Test: References written by the caller are visible to fixtures
#[rstest]
fn test_caller_references_visible(
	mut fixture_manager: FixtureManager,
	execution_log: ExecutionLog,
) {
	fixture_manager.references_mut().set("a", 41_i64);

	fixture_manager
		.load_fixture(Root {
			log: execution_log.clone(),
		})
		.unwrap_err();

	// Dep is not registered, so nothing ran and the caller's value is intact.
	assert!(execution_log.is_empty());
	assert_eq!(
		*fixture_manager.references().get_as::<i64>("a").unwrap(),
		41
	);
}

/// Test: Missing references surface as ReferenceNotFound from fixtures
#[rstest]
fn test_missing_reference_propagates(mut fixture_manager: FixtureManager) {
	struct NeedsCustomer;

	impl Fixture for NeedsCustomer {
		fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
			references.get("customer.default")?;
			Ok(())
		}
	}

	let result = fixture_manager.load_fixture(NeedsCustomer);

	assert!(matches!(
		result,
		Err(FixtureError::ReferenceNotFound(name)) if name == "customer.default"
	));
	assert!(!fixture_manager.is_loaded(&FixtureId::of::<NeedsCustomer>()));
}
