// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer for merging from multiple sources.

use std::path::PathBuf;

use serde::Deserialize;

/// Partial configuration layer - all fields are Option for merging.
///
/// Values stay as strings until [`MotarjemConfig::from_layer`](crate::MotarjemConfig::from_layer)
/// so errors can name the offending key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
	#[serde(default)]
	pub mode: Option<String>,
	#[serde(default)]
	pub source: Option<String>,
	#[serde(default)]
	pub target: Option<String>,
	#[serde(default)]
	pub theme: Option<String>,
	#[serde(default)]
	pub locale: Option<String>,
	#[serde(default)]
	pub direction: Option<String>,
	#[serde(default)]
	pub log_file: Option<PathBuf>,
	#[serde(default)]
	pub api: Option<ApiLayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiLayer {
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
	#[serde(default)]
	pub email: Option<String>,
}

impl ConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_value(&mut self.mode, other.mode);
		merge_value(&mut self.source, other.source);
		merge_value(&mut self.target, other.target);
		merge_value(&mut self.theme, other.theme);
		merge_value(&mut self.locale, other.locale);
		merge_value(&mut self.direction, other.direction);
		merge_value(&mut self.log_file, other.log_file);
		merge_option(&mut self.api, other.api, ApiLayer::merge);
	}

	pub(crate) fn api_mut(&mut self) -> &mut ApiLayer {
		self.api.get_or_insert_with(ApiLayer::default)
	}
}

impl ApiLayer {
	fn merge(&mut self, other: ApiLayer) {
		merge_value(&mut self.base_url, other.base_url);
		merge_value(&mut self.timeout_secs, other.timeout_secs);
		merge_value(&mut self.email, other.email);
	}
}

fn merge_value<T>(target: &mut Option<T>, source: Option<T>) {
	if source.is_some() {
		*target = source;
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}
