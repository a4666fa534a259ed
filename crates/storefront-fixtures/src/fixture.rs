//! Fixture units and their identities.
//!
//! A fixture is a self-contained loader of test data. Its identity is its
//! concrete Rust type, so requesting the same fixture twice (directly or as a
//! shared prerequisite) always maps to the same [`FixtureId`].

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::FixtureResult;
use crate::reference::ReferenceRepository;

/// Stable identity of a fixture unit.
///
/// Equality and hashing only consider the underlying [`TypeId`]; the type name
/// is carried for error messages and logs.
///
/// # Examples
///
/// ```
/// use storefront_fixtures::FixtureId;
///
/// struct CustomerFixture;
///
/// let id = FixtureId::of::<CustomerFixture>();
/// assert_eq!(id, FixtureId::of::<CustomerFixture>());
/// assert!(id.name().ends_with("CustomerFixture"));
/// ```
#[derive(Clone, Copy)]
pub struct FixtureId {
	type_id: TypeId,
	name: &'static str,
}

impl FixtureId {
	/// Returns the identity of the fixture type `F`.
	pub fn of<F: ?Sized + 'static>() -> Self {
		Self {
			type_id: TypeId::of::<F>(),
			name: std::any::type_name::<F>(),
		}
	}

	/// Fully qualified type name of the fixture.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Type name without its module path.
	pub fn short_name(&self) -> &'static str {
		self.name.rsplit("::").next().unwrap_or(self.name)
	}
}

impl PartialEq for FixtureId {
	fn eq(&self, other: &Self) -> bool {
		self.type_id == other.type_id
	}
}

impl Eq for FixtureId {}

impl Hash for FixtureId {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.type_id.hash(state);
	}
}

impl fmt::Debug for FixtureId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("FixtureId").field(&self.name).finish()
	}
}

impl fmt::Display for FixtureId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// A unit of test data loading.
///
/// The identity of a fixture is always its concrete type; trait objects
/// report it through `<dyn Fixture>::id`.
///
/// Implementors create domain records (customers, products, orders, ...) and
/// publish whatever later fixtures or tests need into the shared
/// [`ReferenceRepository`].
///
/// # Example
///
/// ```
/// use storefront_fixtures::prelude::*;
///
/// #[derive(Default)]
/// struct CurrencyFixture;
///
/// impl Fixture for CurrencyFixture {
///     fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
///         references.set("currency.default", "EUR".to_string());
///         Ok(())
///     }
/// }
///
/// #[derive(Default)]
/// struct ProductFixture;
///
/// impl Fixture for ProductFixture {
///     fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()> {
///         let currency = references.get_as::<String>("currency.default")?;
///         references.set("product.shirt", format!("shirt priced in {}", currency));
///         Ok(())
///     }
///
///     fn dependencies(&self) -> Vec<FixtureId> {
///         vec![FixtureId::of::<CurrencyFixture>()]
///     }
/// }
/// ```
pub trait Fixture: identity::Identified + Send + Sync + 'static {
	/// Loads the fixture data, writing named results into `references`.
	fn load(&self, references: &mut ReferenceRepository) -> FixtureResult<()>;

	/// Fixtures that must be fully loaded before this one.
	fn dependencies(&self) -> Vec<FixtureId> {
		Vec::new()
	}
}

impl dyn Fixture {
	/// Identity of the concrete fixture behind this trait object.
	pub fn id(&self) -> FixtureId {
		identity::Identified::fixture_id(self)
	}
}

mod identity {
	use super::FixtureId;

	/// Reports the concrete type of a fixture.
	///
	/// Implemented for every sized `'static` type and not nameable outside
	/// this crate, so implementors cannot substitute another identity.
	pub trait Identified {
		fn fixture_id(&self) -> FixtureId;
	}

	impl<T: 'static> Identified for T {
		fn fixture_id(&self) -> FixtureId {
			FixtureId::of::<T>()
		}
	}
}
