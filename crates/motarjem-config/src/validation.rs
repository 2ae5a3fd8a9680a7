// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration validation rules.

use motarjem_translate::Language;
use motarjem_workflow::ScreenMode;
use tracing::warn;

use crate::runtime::MotarjemConfig;
use crate::ConfigError;

/// Validate the configuration.
///
/// Returns Ok(()) if valid, or a ConfigError with details.
pub fn validate_config(config: &MotarjemConfig) -> Result<(), ConfigError> {
	validate_languages(config)?;
	validate_locale(config)?;
	validate_api(config)?;

	Ok(())
}

fn validate_languages(config: &MotarjemConfig) -> Result<(), ConfigError> {
	if config.source == config.target {
		return Err(ConfigError::validation(format!(
			"source and target must differ (both are '{}')",
			config.source
		)));
	}

	if config.mode == ScreenMode::FixedTarget && config.target != Language::DEFAULT_TARGET {
		return Err(ConfigError::invalid_value(
			"target",
			format!(
				"fixed-target mode always translates to '{}'; use mode = \"two-way\" to choose",
				Language::DEFAULT_TARGET
			),
		));
	}

	Ok(())
}

fn validate_locale(config: &MotarjemConfig) -> Result<(), ConfigError> {
	if let Some(locale) = &config.locale {
		if !motarjem_common_i18n::is_supported(locale) {
			let available: Vec<&str> = motarjem_common_i18n::available_locales()
				.iter()
				.map(|l| l.code)
				.collect();
			return Err(ConfigError::invalid_value(
				"locale",
				format!("'{locale}' is not one of {}", available.join(", ")),
			));
		}
	}
	Ok(())
}

fn validate_api(config: &MotarjemConfig) -> Result<(), ConfigError> {
	let url = config.api.base_url.trim();
	if url.is_empty() {
		return Err(ConfigError::invalid_value("api.base_url", "base_url cannot be empty"));
	}
	if !url.starts_with("http://") && !url.starts_with("https://") {
		return Err(ConfigError::invalid_value(
			"api.base_url",
			"base_url must start with http:// or https://",
		));
	}
	if url.contains('?') {
		return Err(ConfigError::invalid_value(
			"api.base_url",
			"base_url must not carry a query string",
		));
	}

	if config.api.timeout.is_zero() {
		warn!("api.timeout_secs is 0; requests will wait indefinitely");
	}

	Ok(())
}
