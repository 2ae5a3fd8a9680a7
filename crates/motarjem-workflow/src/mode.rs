// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which screen layout and language rules are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenMode {
	/// Any supported source, output pinned to the designated target. No swap.
	#[default]
	FixedTarget,
	/// Source and target chosen freely; swap enabled.
	TwoWay,
}

impl ScreenMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			ScreenMode::FixedTarget => "fixed-target",
			ScreenMode::TwoWay => "two-way",
		}
	}

	pub fn allows_swap(&self) -> bool {
		matches!(self, ScreenMode::TwoWay)
	}
}

impl fmt::Display for ScreenMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ScreenMode {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"fixed-target" | "fixed" => Ok(ScreenMode::FixedTarget),
			"two-way" | "twoway" | "swap" => Ok(ScreenMode::TwoWay),
			other => Err(format!("unknown screen mode '{other}' (expected fixed-target or two-way)")),
		}
	}
}

/// Presentation theme. Resolved to concrete styles by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
	#[default]
	Light,
	Dark,
}

impl ThemeMode {
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}

	pub fn is_dark(&self) -> bool {
		matches!(self, ThemeMode::Dark)
	}
}

impl FromStr for ThemeMode {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"light" => Ok(ThemeMode::Light),
			"dark" => Ok(ThemeMode::Dark),
			other => Err(format!("unknown theme '{other}' (expected light or dark)")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn screen_mode_parses_aliases() {
		assert_eq!("fixed".parse::<ScreenMode>(), Ok(ScreenMode::FixedTarget));
		assert_eq!("Two-Way".parse::<ScreenMode>(), Ok(ScreenMode::TwoWay));
		assert!("sideways".parse::<ScreenMode>().is_err());
	}

	#[test]
	fn only_two_way_allows_swap() {
		assert!(!ScreenMode::FixedTarget.allows_swap());
		assert!(ScreenMode::TwoWay.allows_swap());
	}

	#[test]
	fn theme_toggles_back_and_forth() {
		assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
		assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
		assert!(ThemeMode::Dark.is_dark());
	}
}
