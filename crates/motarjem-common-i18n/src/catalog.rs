// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Gettext catalog loading and translation functions.

use std::collections::HashMap;

use gettext::Catalog;
use once_cell::sync::Lazy;

use crate::locale::DEFAULT_LOCALE;

const EN_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/en.mo"));
const FA_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/fa.mo"));
const AR_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/ar.mo"));

static CATALOGS: Lazy<HashMap<&'static str, Catalog>> = Lazy::new(|| {
	let mut map = HashMap::new();

	for (code, bytes) in [("en", EN_MO), ("fa", FA_MO), ("ar", AR_MO)] {
		match Catalog::parse(bytes) {
			Ok(catalog) => {
				map.insert(code, catalog);
			}
			Err(e) if code == DEFAULT_LOCALE => {
				tracing::error!(locale = code, error = %e, "failed to parse translation catalog");
			}
			Err(e) => {
				tracing::warn!(locale = code, error = %e, "failed to parse translation catalog");
			}
		}
	}

	map
});

/// Translate a message key for the given locale.
///
/// Falls back to English if the key is missing, then to the key itself.
///
/// # Example
///
/// ```
/// use motarjem_common_i18n::t;
///
/// assert_eq!(t("en", "client.status.no_translation"), "No translation found");
/// ```
pub fn t(locale: &str, msgid: &str) -> String {
	if let Some(catalog) = CATALOGS.get(locale) {
		let translated = catalog.gettext(msgid);
		if translated != msgid {
			return translated.to_string();
		}
	}

	if locale != DEFAULT_LOCALE {
		if let Some(catalog) = CATALOGS.get(DEFAULT_LOCALE) {
			let translated = catalog.gettext(msgid);
			if translated != msgid {
				return translated.to_string();
			}
		}
	}

	msgid.to_string()
}

/// Translate a message key with `{name}` variable substitution.
///
/// # Example
///
/// ```
/// use motarjem_common_i18n::t_fmt;
///
/// let label = t_fmt("en", "client.action.translate", &[("language", "Persian")]);
/// assert_eq!(label, "Translate to Persian");
/// ```
pub fn t_fmt(locale: &str, msgid: &str, args: &[(&str, &str)]) -> String {
	let mut result = t(locale, msgid);

	for (name, value) in args {
		let placeholder = format!("{{{name}}}");
		result = result.replace(&placeholder, value);
	}

	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_translate_english() {
		assert_eq!(t("en", "client.status.enter_text"), "Please enter some text");
	}

	#[test]
	fn test_translate_persian() {
		assert_eq!(t("fa", "client.status.enter_text"), "لطفاً متنی وارد کنید");
		assert_eq!(t("fa", "client.status.no_translation"), "ترجمه‌ای یافت نشد");
		assert_eq!(
			t("fa", "client.status.connection_error"),
			"خطا در اتصال به سرویس ترجمه"
		);
	}

	#[test]
	fn test_translate_arabic() {
		assert_eq!(t("ar", "client.action.copy"), "نسخ");
	}

	#[test]
	fn test_fallback_to_msgid() {
		assert_eq!(t("en", "completely.unknown.key"), "completely.unknown.key");
		assert_eq!(t("fa", "completely.unknown.key"), "completely.unknown.key");
	}

	#[test]
	fn test_unknown_locale_falls_back_to_english() {
		assert_eq!(t("xx", "client.action.clear"), t("en", "client.action.clear"));
	}

	#[test]
	fn test_variable_substitution() {
		let result = t_fmt("fa", "client.action.translate", &[("language", "فارسی")]);
		assert_eq!(result, "ترجمه به فارسی");
		assert!(!result.contains("{language}"));
	}

	#[test]
	fn test_every_language_has_a_name() {
		for code in ["en", "ar", "tr", "fr", "de", "es", "ru", "fa"] {
			let key = format!("client.language.{code}");
			assert_ne!(t("en", &key), key);
			assert_ne!(t("fa", &key), key);
		}
	}
}
