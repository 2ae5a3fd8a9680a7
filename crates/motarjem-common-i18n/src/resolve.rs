// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{locale_info, DEFAULT_LOCALE};

/// Resolve the effective interface locale.
///
/// Resolution order (highest to lowest priority):
/// 1. Explicit preference (CLI flag, config file), if supported
/// 2. Fallback locale (usually the detected system locale), if supported
/// 3. English ("en")
///
/// Region suffixes are ignored, so `fa-IR` and `fa_IR` resolve to `fa`.
///
/// # Example
///
/// ```
/// use motarjem_common_i18n::resolve_locale;
///
/// assert_eq!(resolve_locale(Some("fa"), "en"), "fa");
/// assert_eq!(resolve_locale(None, "ar_EG"), "ar");
/// assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), "en");
/// ```
pub fn resolve_locale(preferred: Option<&str>, fallback: &str) -> &'static str {
	if let Some(locale) = preferred.and_then(to_static) {
		return locale;
	}

	if let Some(locale) = to_static(fallback) {
		return locale;
	}

	DEFAULT_LOCALE
}

fn to_static(locale: &str) -> Option<&'static str> {
	let lang = locale.split(['_', '-']).next()?.to_lowercase();
	locale_info(&lang).map(|info| info.code)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_preference_takes_priority() {
		assert_eq!(resolve_locale(Some("fa"), "en"), "fa");
		assert_eq!(resolve_locale(Some("ar"), "fa"), "ar");
	}

	#[test]
	fn test_fallback_when_no_preference() {
		assert_eq!(resolve_locale(None, "fa"), "fa");
		assert_eq!(resolve_locale(None, "ar"), "ar");
	}

	#[test]
	fn test_region_suffix_is_ignored() {
		assert_eq!(resolve_locale(Some("fa-IR"), "en"), "fa");
		assert_eq!(resolve_locale(None, "en_US"), "en");
		assert_eq!(resolve_locale(Some("AR_eg"), "en"), "ar");
	}

	#[test]
	fn test_fallback_to_english_when_both_invalid() {
		assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), "en");
		assert_eq!(resolve_locale(None, "de"), "en");
	}

	#[test]
	fn test_empty_string_is_invalid() {
		assert_eq!(resolve_locale(Some(""), "en"), "en");
		assert_eq!(resolve_locale(None, ""), "en");
	}

	proptest! {
		#[test]
		fn resolved_locale_is_always_supported(pref in ".{0,8}", fallback in ".{0,8}") {
			let resolved = resolve_locale(Some(&pref), &fallback);
			prop_assert!(crate::is_supported(resolved));
		}
	}
}
