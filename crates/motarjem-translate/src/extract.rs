// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Ordered extraction of the translated string from a response payload.
//!
//! The service can put the translation in more than one place. An
//! [`ExtractorChain`] tries each [`Extractor`] in order and returns the first
//! non-empty string, so the fallback policy is testable without any network.

use serde_json::Value;

/// One place in the payload where a translation may live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
	/// `responseData.translatedText`
	ResponseData,
	/// `matches[0].translation`
	FirstMatch,
}

impl Extractor {
	pub fn pointer(&self) -> &'static str {
		match self {
			Extractor::ResponseData => "/responseData/translatedText",
			Extractor::FirstMatch => "/matches/0/translation",
		}
	}

	/// Returns the string at this extractor's location, if present and non-empty.
	pub fn extract<'a>(&self, payload: &'a Value) -> Option<&'a str> {
		payload
			.pointer(self.pointer())
			.and_then(Value::as_str)
			.filter(|text| !text.is_empty())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorChain {
	extractors: Vec<Extractor>,
}

impl Default for ExtractorChain {
	fn default() -> Self {
		Self::new(vec![Extractor::ResponseData, Extractor::FirstMatch])
	}
}

impl ExtractorChain {
	pub fn new(extractors: Vec<Extractor>) -> Self {
		Self { extractors }
	}

	/// A chain that only reads the primary field.
	pub fn primary_only() -> Self {
		Self::new(vec![Extractor::ResponseData])
	}

	pub fn extractors(&self) -> &[Extractor] {
		&self.extractors
	}

	/// Applies the extractors in order and returns the first hit.
	pub fn extract(&self, payload: &Value) -> Option<String> {
		self.extractors.iter().find_map(|extractor| {
			let text = extractor.extract(payload)?;
			tracing::trace!(extractor = ?extractor, "translation extracted");
			Some(text.to_string())
		})
	}
}
