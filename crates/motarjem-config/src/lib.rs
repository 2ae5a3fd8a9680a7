// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for Motarjem.
//!
//! This crate provides:
//! - XDG Base Directory compliant path resolution
//! - Layered configuration from multiple sources
//! - TOML configuration file parsing
//! - Environment variable overrides
//! - Configuration validation

pub mod error;
pub mod layer;
pub mod paths;
pub mod registry;
pub mod runtime;
pub mod sources;
pub mod validation;

pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use paths::PathsConfig;
pub use registry::ConfigRegistry;
pub use runtime::{ApiConfig, DirectionPreference, MotarjemConfig};
pub use sources::{CliOverrides, ConfigSource, Precedence};

/// Load configuration from defaults, config files, environment and CLI.
///
/// `--config` replaces the user config file and must exist.
pub fn load_config_with_cli(cli: CliOverrides) -> Result<MotarjemConfig, ConfigError> {
	let paths = paths::resolve_xdg_paths()?;

	let mut registry = ConfigRegistry::new();

	registry.register(Box::new(sources::DefaultsSource));
	registry.register(Box::new(sources::FileSource::system()));
	match &cli.config_file {
		Some(path) => registry.register(Box::new(sources::FileSource::explicit(path.clone()))),
		None => registry.register(Box::new(sources::FileSource::user(&paths))),
	}
	registry.register(Box::new(sources::EnvSource::from_process()));
	registry.register(Box::new(sources::CliSource::new(cli)));

	registry.load(paths)
}
