//! Settings for fixture loading.
//!
//! Settings come from defaults, a TOML document, or environment variables
//! prefixed with [`ENV_PREFIX`].

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "STOREFRONT_FIXTURES_";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// Settings file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Settings document is not valid TOML for these settings.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A setting has an unusable value.
	#[error("Invalid value for {key}: {value}")]
	InvalidValue {
		/// Setting name.
		key: String,
		/// Offending value.
		value: String,
	},

	/// A setting is given both at the top level and in the `[fixtures]` table.
	#[error("Setting {0} is defined both at the top level and in [fixtures]")]
	Conflict(String),
}

/// Fixture loading settings.
///
/// # Examples
///
/// ```
/// use storefront_fixtures::FixtureSettings;
///
/// let settings = FixtureSettings::from_toml_str("max_resolution_depth = 16").unwrap();
/// assert_eq!(settings.max_resolution_depth, Some(16));
///
/// assert_eq!(FixtureSettings::default().max_resolution_depth, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureSettings {
	/// Maximum length of a dependency chain before resolution gives up.
	///
	/// `None` resolves chains of any length.
	pub max_resolution_depth: Option<usize>,
}

/// Document shape accepting either top-level keys or a `[fixtures]` table.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsDocument {
	fixtures: Option<FixtureSettings>,
	max_resolution_depth: Option<usize>,
}

impl FixtureSettings {
	/// Caps dependency chains at `depth` fixtures.
	pub fn with_max_resolution_depth(mut self, depth: usize) -> Self {
		self.max_resolution_depth = Some(depth);
		self
	}

	/// Parses settings from a TOML document.
	///
	/// Keys may sit at the top level or inside a `[fixtures]` table, but not
	/// both. Unknown keys are rejected.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let document: SettingsDocument = toml::from_str(source)?;
		let settings = match (document.fixtures, document.max_resolution_depth) {
			(Some(table), None) => table,
			(None, depth) => Self {
				max_resolution_depth: depth,
			},
			(Some(_), Some(_)) => {
				return Err(SettingsError::Conflict("max_resolution_depth".to_string()));
			}
		};
		settings.validate()?;
		Ok(settings)
	}

	/// Reads settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let source = std::fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}

	/// Reads settings from the process environment.
	///
	/// Unset variables keep their defaults.
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Reads settings through `lookup`, which receives full variable names.
	pub fn from_lookup<L>(lookup: L) -> Result<Self, SettingsError>
	where
		L: Fn(&str) -> Option<String>,
	{
		let mut settings = Self::default();

		let key = format!("{}MAX_RESOLUTION_DEPTH", ENV_PREFIX);
		if let Some(value) = lookup(&key) {
			let depth = value
				.trim()
				.parse()
				.map_err(|_| SettingsError::InvalidValue {
					key: key.clone(),
					value: value.clone(),
				})?;
			settings.max_resolution_depth = Some(depth);
		}

		settings.validate()?;
		Ok(settings)
	}

	/// Checks that the settings are usable.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.max_resolution_depth == Some(0) {
			return Err(SettingsError::InvalidValue {
				key: "max_resolution_depth".to_string(),
				value: "0".to_string(),
			});
		}
		Ok(())
	}
}
