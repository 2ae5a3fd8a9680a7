// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request types for the translation service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A source/target language tuple, rendered as `source|target` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
	pub source: Language,
	pub target: Language,
}

impl LanguagePair {
	pub fn new(source: Language, target: Language) -> Self {
		Self { source, target }
	}

	pub fn reversed(&self) -> Self {
		Self {
			source: self.target,
			target: self.source,
		}
	}
}

impl fmt::Display for LanguagePair {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}|{}", self.source.code(), self.target.code())
	}
}

/// One translation request as issued by the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
	pub text: String,
	pub pair: LanguagePair,
}

impl TranslationRequest {
	pub fn new(text: impl Into<String>, pair: LanguagePair) -> Self {
		Self {
			text: text.into(),
			pair,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pair_renders_with_pipe() {
		let pair = LanguagePair::new(Language::En, Language::Fa);
		assert_eq!(pair.to_string(), "en|fa");
	}

	#[test]
	fn reversed_pair_swaps_sides() {
		let pair = LanguagePair::new(Language::De, Language::Ru).reversed();
		assert_eq!(pair.source, Language::Ru);
		assert_eq!(pair.target, Language::De);
	}
}
