// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use motarjem_translate::{Language, DEFAULT_BASE_URL};
use motarjem_workflow::{ScreenMode, ThemeMode};
use serde::{Deserialize, Serialize};

use crate::layer::{ApiLayer, ConfigLayer};
use crate::paths::PathsConfig;
use crate::ConfigError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// How the screen picks its layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionPreference {
	/// Follow the UI locale.
	#[default]
	Auto,
	Ltr,
	Rtl,
}

impl FromStr for DirectionPreference {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"auto" => Ok(Self::Auto),
			"ltr" => Ok(Self::Ltr),
			"rtl" => Ok(Self::Rtl),
			other => Err(format!("unknown direction '{other}' (expected auto, ltr or rtl)")),
		}
	}
}

impl fmt::Display for DirectionPreference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Auto => "auto",
			Self::Ltr => "ltr",
			Self::Rtl => "rtl",
		})
	}
}

/// The final, validated configuration for Motarjem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotarjemConfig {
	pub mode: ScreenMode,
	pub source: Language,
	pub target: Language,
	pub theme: ThemeMode,
	/// UI locale; `None` means detect from the system.
	pub locale: Option<String>,
	pub direction: DirectionPreference,
	pub api: ApiConfig,
	pub log_file: PathBuf,

	/// Resolved XDG paths (not serialized)
	#[serde(skip)]
	pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
	pub base_url: String,
	pub timeout: Duration,
	/// Contact address sent as MyMemory's `de` parameter.
	pub email: Option<String>,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
			email: None,
		}
	}
}

impl MotarjemConfig {
	/// Build runtime config from a merged layer, applying defaults.
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Result<Self, ConfigError> {
		let mode = parse_field("mode", layer.mode)?.unwrap_or_default();
		let source = parse_language("source", layer.source)?.unwrap_or(Language::En);
		let target = parse_language("target", layer.target)?.unwrap_or(Language::DEFAULT_TARGET);
		let theme = parse_field("theme", layer.theme)?.unwrap_or_default();
		let direction = parse_field("direction", layer.direction)?.unwrap_or_default();
		let locale = layer
			.locale
			.map(|l| l.trim().to_string())
			.filter(|l| !l.is_empty());
		let log_file = layer
			.log_file
			.unwrap_or_else(|| paths.default_log_file());

		Ok(Self {
			mode,
			source,
			target,
			theme,
			locale,
			direction,
			api: build_api_config(layer.api),
			log_file,
			paths,
		})
	}
}

impl Default for MotarjemConfig {
	fn default() -> Self {
		let paths = PathsConfig::default();
		Self {
			mode: ScreenMode::default(),
			source: Language::En,
			target: Language::DEFAULT_TARGET,
			theme: ThemeMode::default(),
			locale: None,
			direction: DirectionPreference::default(),
			api: ApiConfig::default(),
			log_file: paths.default_log_file(),
			paths,
		}
	}
}

fn build_api_config(layer: Option<ApiLayer>) -> ApiConfig {
	let layer = layer.unwrap_or_default();
	let defaults = ApiConfig::default();
	ApiConfig {
		base_url: layer.base_url.unwrap_or(defaults.base_url),
		timeout: layer
			.timeout_secs
			.map(Duration::from_secs)
			.unwrap_or(defaults.timeout),
		email: layer.email.filter(|e| !e.trim().is_empty()),
	}
}

fn parse_field<T>(field: &str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
	T: FromStr<Err = String>,
{
	value
		.map(|v| v.parse::<T>().map_err(|e| ConfigError::invalid_value(field, e)))
		.transpose()
}

fn parse_language(field: &str, value: Option<String>) -> Result<Option<Language>, ConfigError> {
	value
		.map(|v| {
			v.parse::<Language>()
				.map_err(|e| ConfigError::invalid_value(field, e.to_string()))
		})
		.transpose()
}
