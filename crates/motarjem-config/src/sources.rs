// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: files, environment, CLI, defaults.

use std::path::PathBuf;

use tracing::{debug, trace, warn};

use crate::layer::ConfigLayer;
use crate::paths::{PathsConfig, SYSTEM_CONFIG_FILE};
use crate::ConfigError;

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	SystemFile = 20,
	UserFile = 30,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	/// Name for logging
	fn name(&self) -> &'static str;

	/// Precedence level
	fn precedence(&self) -> Precedence;

	/// Load configuration layer from this source
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		// Defaults are applied in MotarjemConfig::from_layer
		Ok(ConfigLayer::default())
	}
}

/// File-based configuration source (TOML).
pub struct FileSource {
	path: PathBuf,
	precedence: Precedence,
	name: &'static str,
	required: bool,
}

impl FileSource {
	/// System config: /etc/motarjem/config.toml
	pub fn system() -> Self {
		Self {
			path: PathBuf::from(SYSTEM_CONFIG_FILE),
			precedence: Precedence::SystemFile,
			name: "system-config",
			required: false,
		}
	}

	/// User config: ~/.config/motarjem/config.toml
	pub fn user(paths: &PathsConfig) -> Self {
		Self {
			path: paths.user_config_file.clone(),
			precedence: Precedence::UserFile,
			name: "user-config",
			required: false,
		}
	}

	/// A file named with `--config`; it takes the user file's place and must exist.
	pub fn explicit(path: PathBuf) -> Self {
		Self {
			path,
			precedence: Precedence::UserFile,
			name: "explicit-config",
			required: true,
		}
	}

	/// Custom file path with specified precedence
	pub fn custom(path: PathBuf, precedence: Precedence, name: &'static str) -> Self {
		Self {
			path,
			precedence,
			name,
			required: false,
		}
	}
}

impl ConfigSource for FileSource {
	fn name(&self) -> &'static str {
		self.name
	}
	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			if self.required {
				return Err(ConfigError::FileNotFound(self.path.clone()));
			}
			debug!(path = %self.path.display(), source = self.name, "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), source = self.name, "loading config file");

		let content = std::fs::read_to_string(&self.path)?;
		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!(source = self.name, "parsed config layer");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: MOTARJEM_<KEY>, with MOTARJEM_API_* for the `[api]` table.
pub struct EnvSource {
	vars: Vec<(String, String)>,
}

impl EnvSource {
	/// Snapshot of the current process environment.
	pub fn from_process() -> Self {
		Self::from_vars(std::env::vars())
	}

	pub fn from_vars<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			vars: vars
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		let mut layer = ConfigLayer::default();

		for (key, value) in &self.vars {
			if !key.starts_with("MOTARJEM_") {
				continue;
			}

			let value = value.trim().to_string();
			if value.is_empty() {
				continue;
			}

			trace!(key = %key, "processing env var");

			match key.as_str() {
				"MOTARJEM_MODE" => layer.mode = Some(value),
				"MOTARJEM_SOURCE" => layer.source = Some(value),
				"MOTARJEM_TARGET" => layer.target = Some(value),
				"MOTARJEM_THEME" => layer.theme = Some(value),
				"MOTARJEM_LOCALE" => layer.locale = Some(value),
				"MOTARJEM_DIRECTION" => layer.direction = Some(value),
				"MOTARJEM_LOG_FILE" => layer.log_file = Some(PathBuf::from(value)),

				"MOTARJEM_API_URL" => layer.api_mut().base_url = Some(value),
				"MOTARJEM_API_EMAIL" => layer.api_mut().email = Some(value),
				"MOTARJEM_API_TIMEOUT_SECS" => match value.parse() {
					Ok(secs) => layer.api_mut().timeout_secs = Some(secs),
					Err(_) => {
						return Err(ConfigError::invalid_value(
							key.as_str(),
							format!("'{value}' is not a whole number of seconds"),
						));
					}
				},

				_ => {
					// MOTARJEM_LOG and unknown variables are not configuration keys
				}
			}
		}

		Ok(layer)
	}
}

/// CLI override source.
pub struct CliSource {
	overrides: CliOverrides,
}

/// CLI argument overrides.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub mode: Option<String>,
	pub source: Option<String>,
	pub target: Option<String>,
	pub theme: Option<String>,
	pub locale: Option<String>,
	pub direction: Option<String>,
	pub api_url: Option<String>,
	pub log_file: Option<PathBuf>,
	pub config_file: Option<PathBuf>,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading CLI overrides");
		let o = &self.overrides;
		let mut layer = ConfigLayer {
			mode: o.mode.clone(),
			source: o.source.clone(),
			target: o.target.clone(),
			theme: o.theme.clone(),
			locale: o.locale.clone(),
			direction: o.direction.clone(),
			log_file: o.log_file.clone(),
			api: None,
		};

		if let Some(ref url) = o.api_url {
			if url.trim().is_empty() {
				warn!("ignoring empty --api-url");
			} else {
				layer.api_mut().base_url = Some(url.clone());
			}
		}

		Ok(layer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Cli > Precedence::Environment);
		assert!(Precedence::Environment > Precedence::UserFile);
		assert!(Precedence::UserFile > Precedence::SystemFile);
		assert!(Precedence::SystemFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.source.is_none());
		assert!(layer.api.is_none());
	}

	#[test]
	fn test_file_source_missing_file_returns_empty() {
		let source = FileSource::custom(
			PathBuf::from("/nonexistent/config.toml"),
			Precedence::UserFile,
			"test",
		);
		let layer = source.load().unwrap();
		assert!(layer.mode.is_none());
	}

	#[test]
	fn test_explicit_file_must_exist() {
		let source = FileSource::explicit(PathBuf::from("/nonexistent/motarjem.toml"));
		assert!(matches!(source.load(), Err(ConfigError::FileNotFound(_))));
	}

	#[test]
	fn test_env_source_reads_prefixed_keys() {
		let source = EnvSource::from_vars([
			("MOTARJEM_SOURCE", "de"),
			("MOTARJEM_THEME", " dark "),
			("MOTARJEM_API_TIMEOUT_SECS", "7"),
			("MOTARJEM_LOG", "debug"),
			("HOME", "/root"),
			("MOTARJEM_LOCALE", "  "),
		]);
		let layer = source.load().unwrap();
		assert_eq!(layer.source.as_deref(), Some("de"));
		assert_eq!(layer.theme.as_deref(), Some("dark"));
		assert_eq!(layer.api.unwrap().timeout_secs, Some(7));
		assert!(layer.locale.is_none());
	}

	#[test]
	fn test_env_source_rejects_bad_timeout() {
		let source = EnvSource::from_vars([("MOTARJEM_API_TIMEOUT_SECS", "soon")]);
		assert!(matches!(source.load(), Err(ConfigError::InvalidValue { .. })));
	}

	#[test]
	fn test_cli_source_maps_api_url() {
		let source = CliSource::new(CliOverrides {
			api_url: Some("http://localhost:8080/get".to_string()),
			direction: Some("ltr".to_string()),
			..Default::default()
		});
		let layer = source.load().unwrap();
		assert_eq!(layer.direction.as_deref(), Some("ltr"));
		assert_eq!(
			layer.api.unwrap().base_url.as_deref(),
			Some("http://localhost:8080/get")
		);
	}
}
