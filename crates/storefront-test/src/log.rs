//! Execution log for asserting fixture load order.

use std::sync::Arc;

use parking_lot::Mutex;

/// Shared, cloneable record of fixture executions.
///
/// Hand a clone to each fixture (usually through a registry constructor) and
/// let `load` call [`ExecutionLog::record`]; the test then inspects the order.
///
/// # Examples
///
/// ```
/// use storefront_test::ExecutionLog;
///
/// let log = ExecutionLog::new();
/// let fixture_log = log.clone();
///
/// fixture_log.record("CurrencyFixture");
/// fixture_log.record("ProductFixture");
///
/// assert_eq!(log.entries(), vec!["CurrencyFixture", "ProductFixture"]);
/// assert!(log.ran_before("CurrencyFixture", "ProductFixture"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExecutionLog {
	entries: Arc<Mutex<Vec<&'static str>>>,
}

impl ExecutionLog {
	/// Creates an empty log.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records that `name` executed.
	pub fn record(&self, name: &'static str) {
		self.entries.lock().push(name);
	}

	/// Returns every recorded execution, in order.
	pub fn entries(&self) -> Vec<&'static str> {
		self.entries.lock().clone()
	}

	/// Returns how many times `name` executed.
	pub fn count(&self, name: &str) -> usize {
		self.entries
			.lock()
			.iter()
			.filter(|entry| **entry == name)
			.count()
	}

	/// Returns true if the first execution of `first` precedes the first
	/// execution of `second`. False if either never ran.
	pub fn ran_before(&self, first: &str, second: &str) -> bool {
		let entries = self.entries.lock();
		let first = entries.iter().position(|entry| *entry == first);
		let second = entries.iter().position(|entry| *entry == second);
		matches!((first, second), (Some(a), Some(b)) if a < b)
	}

	/// Returns true if nothing was recorded.
	pub fn is_empty(&self) -> bool {
		self.entries.lock().is_empty()
	}

	/// Forgets all recorded executions.
	pub fn clear(&self) {
		self.entries.lock().clear();
	}
}
