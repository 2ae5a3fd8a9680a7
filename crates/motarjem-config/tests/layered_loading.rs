// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use motarjem_config::sources::{CliSource, DefaultsSource, EnvSource, FileSource};
use motarjem_config::{
	CliOverrides, ConfigError, ConfigRegistry, DirectionPreference, PathsConfig, Precedence,
};
use motarjem_translate::Language;
use motarjem_workflow::{ScreenMode, ThemeMode};
use tempfile::TempDir;

fn paths_in(dir: &TempDir) -> PathsConfig {
	PathsConfig {
		user_config_file: dir.path().join("config.toml"),
		system_config_file: dir.path().join("system.toml"),
		state_dir: dir.path().join("state"),
	}
}

fn registry_for(paths: &PathsConfig, env: Vec<(&str, &str)>, cli: CliOverrides) -> ConfigRegistry {
	let mut registry = ConfigRegistry::new();
	registry.register(Box::new(DefaultsSource));
	registry.register(Box::new(FileSource::custom(
		paths.system_config_file.clone(),
		Precedence::SystemFile,
		"system-config",
	)));
	registry.register(Box::new(FileSource::user(paths)));
	registry.register(Box::new(EnvSource::from_vars(env)));
	registry.register(Box::new(CliSource::new(cli)));
	registry
}

#[test]
fn user_file_is_read() {
	let dir = TempDir::new().unwrap();
	let paths = paths_in(&dir);
	fs::write(
		&paths.user_config_file,
		r#"
mode = "two-way"
source = "fa"
target = "de"
theme = "dark"
locale = "ar"
direction = "ltr"
log_file = "/tmp/motarjem-test.log"

[api]
base_url = "http://127.0.0.1:9000/get"
timeout_secs = 3
email = "translator@example.com"
"#,
	)
	.unwrap();

	let config = registry_for(&paths, vec![], CliOverrides::default())
		.load(paths.clone())
		.unwrap();

	assert_eq!(config.mode, ScreenMode::TwoWay);
	assert_eq!(config.source, Language::Fa);
	assert_eq!(config.target, Language::De);
	assert_eq!(config.theme, ThemeMode::Dark);
	assert_eq!(config.locale.as_deref(), Some("ar"));
	assert_eq!(config.direction, DirectionPreference::Ltr);
	assert_eq!(config.log_file, PathBuf::from("/tmp/motarjem-test.log"));
	assert_eq!(config.api.base_url, "http://127.0.0.1:9000/get");
	assert_eq!(config.api.timeout, Duration::from_secs(3));
	assert_eq!(config.api.email.as_deref(), Some("translator@example.com"));
}

#[test]
fn env_overrides_file_and_cli_overrides_env() {
	let dir = TempDir::new().unwrap();
	let paths = paths_in(&dir);
	fs::write(&paths.system_config_file, "source = \"tr\"\ntheme = \"dark\"\n").unwrap();
	fs::write(&paths.user_config_file, "source = \"fr\"\n").unwrap();

	let cli = CliOverrides {
		source: Some("es".to_string()),
		..Default::default()
	};
	let config = registry_for(&paths, vec![("MOTARJEM_SOURCE", "de"), ("MOTARJEM_THEME", "light")], cli)
		.load(paths.clone())
		.unwrap();

	assert_eq!(config.source, Language::Es);
	assert_eq!(config.theme, ThemeMode::Light);

	let config = registry_for(&paths, vec![("MOTARJEM_SOURCE", "de")], CliOverrides::default())
		.load(paths.clone())
		.unwrap();
	assert_eq!(config.source, Language::De);
	assert_eq!(config.theme, ThemeMode::Dark);
}

#[test]
fn malformed_file_reports_path() {
	let dir = TempDir::new().unwrap();
	let paths = paths_in(&dir);
	fs::write(&paths.user_config_file, "source = [unterminated").unwrap();

	let err = registry_for(&paths, vec![], CliOverrides::default())
		.load(paths.clone())
		.unwrap_err();
	match err {
		ConfigError::TomlParse { path, .. } => assert_eq!(path, paths.user_config_file),
		other => panic!("expected TomlParse, got {other:?}"),
	}
}

#[test]
fn missing_files_fall_back_to_defaults() {
	let dir = TempDir::new().unwrap();
	let paths = paths_in(&dir);

	let config = registry_for(&paths, vec![], CliOverrides::default())
		.load(paths.clone())
		.unwrap();
	assert_eq!(config.mode, ScreenMode::FixedTarget);
	assert_eq!(config.target, Language::Fa);
	assert_eq!(config.log_file, dir.path().join("state").join("motarjem.log"));
}

#[test]
fn same_pair_is_rejected_after_merge() {
	let dir = TempDir::new().unwrap();
	let paths = paths_in(&dir);
	fs::write(&paths.user_config_file, "mode = \"two-way\"\ntarget = \"ru\"\n").unwrap();

	let cli = CliOverrides {
		source: Some("ru".to_string()),
		..Default::default()
	};
	let err = registry_for(&paths, vec![], cli).load(paths.clone()).unwrap_err();
	assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn unknown_language_code_is_rejected() {
	let dir = TempDir::new().unwrap();
	let paths = paths_in(&dir);

	let err = registry_for(&paths, vec![("MOTARJEM_SOURCE", "klingon")], CliOverrides::default())
		.load(paths.clone())
		.unwrap_err();
	assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "source"));
}
