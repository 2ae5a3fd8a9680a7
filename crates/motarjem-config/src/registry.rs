// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration registry - manages sources and merges layers.

use tracing::{debug, info};

use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::runtime::MotarjemConfig;
use crate::sources::ConfigSource;
use crate::validation::validate_config;
use crate::ConfigError;

/// Registry that manages configuration sources and merges them.
pub struct ConfigRegistry {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRegistry {
	/// Create a new empty registry.
	pub fn new() -> Self {
		Self {
			sources: Vec::new(),
		}
	}

	/// Register a configuration source.
	pub fn register(&mut self, source: Box<dyn ConfigSource>) {
		debug!(source = source.name(), precedence = ?source.precedence(), "registering config source");
		self.sources.push(source);
	}

	/// Load configuration from all sources, merge, and validate.
	///
	/// Sources are sorted by precedence (lowest first) and merged
	/// so higher precedence sources override lower ones. A source that
	/// fails to load (unreadable or malformed file, bad env value) aborts
	/// loading; missing optional files yield empty layers.
	pub fn load(&self, paths: PathsConfig) -> Result<MotarjemConfig, ConfigError> {
		let mut sorted_sources: Vec<_> = self.sources.iter().collect();
		sorted_sources.sort_by_key(|s| s.precedence());

		info!(
			source_count = sorted_sources.len(),
			"loading configuration from sources"
		);

		let mut merged = ConfigLayer::default();
		for source in &sorted_sources {
			let layer = source.load()?;
			debug!(source = source.name(), "merging config layer");
			merged.merge(layer);
		}

		let config = MotarjemConfig::from_layer(merged, paths)?;

		validate_config(&config)?;

		info!(
				mode = %config.mode,
				source = %config.source,
				target = %config.target,
				base_url = %config.api.base_url,
				"configuration loaded successfully"
		);

		Ok(config)
	}

	/// Get the number of registered sources.
	pub fn source_count(&self) -> usize {
		self.sources.len()
	}
}

impl Default for ConfigRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sources::{DefaultsSource, Precedence};
	use motarjem_translate::Language;

	fn test_paths() -> PathsConfig {
		PathsConfig {
			user_config_file: "/tmp/test/config.toml".into(),
			system_config_file: "/etc/motarjem/config.toml".into(),
			state_dir: "/tmp/test/state".into(),
		}
	}

	#[test]
	fn test_registry_registers_sources() {
		let mut registry = ConfigRegistry::new();
		assert_eq!(registry.source_count(), 0);

		registry.register(Box::new(DefaultsSource));
		assert_eq!(registry.source_count(), 1);
	}

	#[test]
	fn test_registry_loads_with_defaults() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(DefaultsSource));

		let config = registry.load(test_paths()).unwrap();
		assert_eq!(config.target, Language::Fa);
		assert_eq!(config.log_file, std::path::PathBuf::from("/tmp/test/state/motarjem.log"));
	}

	/// Sources are merged in precedence order, not registration order.
	#[test]
	fn test_precedence_merge_order() {
		struct MockSource {
			name: &'static str,
			precedence: Precedence,
			source: &'static str,
		}

		impl ConfigSource for MockSource {
			fn name(&self) -> &'static str {
				self.name
			}
			fn precedence(&self) -> Precedence {
				self.precedence
			}

			fn load(&self) -> Result<ConfigLayer, ConfigError> {
				Ok(ConfigLayer {
					source: Some(self.source.to_string()),
					..Default::default()
				})
			}
		}

		let mut registry = ConfigRegistry::new();

		registry.register(Box::new(MockSource {
			name: "cli",
			precedence: Precedence::Cli,
			source: "ru",
		}));
		registry.register(Box::new(MockSource {
			name: "user",
			precedence: Precedence::UserFile,
			source: "tr",
		}));

		let config = registry.load(test_paths()).unwrap();
		assert_eq!(config.source, Language::Ru);
	}
}
