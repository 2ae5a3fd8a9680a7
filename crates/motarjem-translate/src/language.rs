// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The closed set of languages the screen offers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedLanguage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	En,
	Ar,
	Tr,
	Fr,
	De,
	Es,
	Ru,
	Fa,
}

impl Language {
	/// Every supported language, in chip order.
	pub const ALL: [Language; 8] = [
		Language::En,
		Language::Ar,
		Language::Tr,
		Language::Fr,
		Language::De,
		Language::Es,
		Language::Ru,
		Language::Fa,
	];

	/// The designated output language of the fixed-target screen.
	pub const DEFAULT_TARGET: Language = Language::Fa;

	pub fn code(&self) -> &'static str {
		match self {
			Language::En => "en",
			Language::Ar => "ar",
			Language::Tr => "tr",
			Language::Fr => "fr",
			Language::De => "de",
			Language::Es => "es",
			Language::Ru => "ru",
			Language::Fa => "fa",
		}
	}

	/// Name of the language written in the language itself.
	pub fn native_label(&self) -> &'static str {
		match self {
			Language::En => "English",
			Language::Ar => "العربية",
			Language::Tr => "Türkçe",
			Language::Fr => "Français",
			Language::De => "Deutsch",
			Language::Es => "Español",
			Language::Ru => "Русский",
			Language::Fa => "فارسی",
		}
	}

	/// A short greeting shown under the chip bar as an input example.
	pub fn hint(&self) -> &'static str {
		match self {
			Language::En => "Hello world",
			Language::Ar => "مرحبا",
			Language::Tr => "Merhaba",
			Language::Fr => "Bonjour",
			Language::De => "Hallo",
			Language::Es => "Hola",
			Language::Ru => "Привет",
			Language::Fa => "سلام",
		}
	}

	/// Whether text in this language is written right-to-left.
	pub fn is_rtl(&self) -> bool {
		matches!(self, Language::Ar | Language::Fa)
	}

	pub fn from_code(code: &str) -> Option<Self> {
		let code = code.trim().to_ascii_lowercase();
		Self::ALL.into_iter().find(|lang| lang.code() == code)
	}

	/// Languages selectable as a source when the target is fixed.
	pub fn sources_for(target: Language) -> Vec<Language> {
		Self::ALL.into_iter().filter(|lang| *lang != target).collect()
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for Language {
	type Err = UnsupportedLanguage;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_code(s).ok_or_else(|| UnsupportedLanguage(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_round_trip_through_from_str() {
		for lang in Language::ALL {
			assert_eq!(lang.code().parse::<Language>(), Ok(lang));
		}
	}

	#[test]
	fn from_code_is_case_and_space_insensitive() {
		assert_eq!(Language::from_code(" EN "), Some(Language::En));
		assert_eq!(Language::from_code("Fa"), Some(Language::Fa));
	}

	#[test]
	fn unknown_code_is_rejected() {
		assert_eq!(
			"xx".parse::<Language>(),
			Err(UnsupportedLanguage("xx".to_string()))
		);
		assert!(Language::from_code("").is_none());
	}

	#[test]
	fn fixed_target_sources_exclude_target() {
		let sources = Language::sources_for(Language::Fa);
		assert_eq!(sources.len(), 7);
		assert!(!sources.contains(&Language::Fa));
		assert_eq!(sources[0], Language::En);
	}

	#[test]
	fn rtl_languages() {
		assert!(Language::Fa.is_rtl());
		assert!(Language::Ar.is_rtl());
		assert!(!Language::En.is_rtl());
	}

	#[test]
	fn serde_uses_codes() {
		let json = serde_json::to_string(&Language::Tr).unwrap();
		assert_eq!(json, "\"tr\"");
		let lang: Language = serde_json::from_str("\"ru\"").unwrap();
		assert_eq!(lang, Language::Ru);
	}
}
