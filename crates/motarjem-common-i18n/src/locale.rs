// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata and direction support.

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Left-to-right (e.g., English)
	Ltr,
	/// Right-to-left (e.g., Persian, Arabic)
	Rtl,
}

impl Direction {
	pub fn as_str(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

/// Metadata about a supported interface locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	/// ISO 639-1 language code
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language
	pub native_name: &'static str,
	pub direction: Direction,
}

/// Locale used when nothing better is known.
pub const DEFAULT_LOCALE: &str = "en";

/// All supported interface locales.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "fa",
		name: "Persian",
		native_name: "فارسی",
		direction: Direction::Rtl,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
];

/// Get metadata for a locale.
///
/// Returns `None` if the locale is not supported.
pub fn locale_info(locale: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|l| l.code == locale)
}

/// Check if a locale uses right-to-left text direction.
///
/// Returns `false` for unsupported locales.
pub fn is_rtl(locale: &str) -> bool {
	locale_info(locale).is_some_and(|info| info.direction == Direction::Rtl)
}

pub fn is_supported(locale: &str) -> bool {
	LOCALES.iter().any(|l| l.code == locale)
}

pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}
