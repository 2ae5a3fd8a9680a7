// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::PathBuf;

use crate::ConfigError;

pub const SYSTEM_CONFIG_FILE: &str = "/etc/motarjem/config.toml";

/// Resolved XDG paths for Motarjem.
#[derive(Debug, Clone)]
pub struct PathsConfig {
	/// User config file: ~/.config/motarjem/config.toml
	pub user_config_file: PathBuf,
	/// System config file: /etc/motarjem/config.toml
	pub system_config_file: PathBuf,
	/// State directory: ~/.local/state/motarjem/
	pub state_dir: PathBuf,
}

impl PathsConfig {
	/// Get the config directory (parent of user_config_file)
	pub fn config_dir(&self) -> PathBuf {
		self
			.user_config_file
			.parent()
			.map(|p| p.to_path_buf())
			.unwrap_or_else(|| self.user_config_file.clone())
	}

	/// Default log file for the interactive screen.
	pub fn default_log_file(&self) -> PathBuf {
		self.state_dir.join("motarjem.log")
	}
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			user_config_file: PathBuf::from("~/.config/motarjem/config.toml"),
			system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
			state_dir: PathBuf::from("~/.local/state/motarjem"),
		}
	}
}

/// Resolve XDG paths according to the Base Directory Specification.
///
/// Uses environment variables if set, otherwise falls back to defaults:
/// - XDG_CONFIG_HOME or ~/.config
/// - XDG_STATE_HOME or ~/.local/state
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".config"));

	let state_home = std::env::var_os("XDG_STATE_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".local/state"));

	tracing::debug!(
			config_home = %config_home.display(),
			state_home = %state_home.display(),
			"resolved XDG paths"
	);

	Ok(PathsConfig {
		user_config_file: config_home.join("motarjem/config.toml"),
		system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
		state_dir: state_home.join("motarjem"),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve_xdg_paths_succeeds() {
		let paths = resolve_xdg_paths().unwrap();
		assert!(paths.user_config_file.ends_with("motarjem/config.toml"));
		assert!(paths.state_dir.ends_with("motarjem"));
	}

	#[test]
	fn test_system_config_is_etc() {
		let paths = resolve_xdg_paths().unwrap();
		assert_eq!(
			paths.system_config_file,
			PathBuf::from("/etc/motarjem/config.toml")
		);
	}

	#[test]
	fn test_config_dir_returns_parent() {
		let paths = PathsConfig::default();
		assert!(paths.config_dir().ends_with("motarjem"));
	}

	#[test]
	fn test_default_log_file_is_in_state_dir() {
		let paths = PathsConfig::default();
		assert_eq!(
			paths.default_log_file(),
			PathBuf::from("~/.local/state/motarjem/motarjem.log")
		);
	}
}
