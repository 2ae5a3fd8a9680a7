// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! MyMemory translation API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, instrument, trace, warn};

use crate::error::TranslateError;
use crate::types::TranslationRequest;

pub const DEFAULT_BASE_URL: &str = "https://api.mymemory.translated.net/get";

/// The outbound translation dependency.
///
/// Implementations issue exactly one request per call and return the raw
/// JSON payload; interpreting it is left to an
/// [`ExtractorChain`](crate::ExtractorChain).
#[async_trait]
pub trait TranslationService: Send + Sync {
	async fn translate(&self, request: &TranslationRequest) -> Result<Value, TranslateError>;
}

/// Client for the public MyMemory `GET /get` endpoint.
#[derive(Debug, Clone)]
pub struct MyMemoryClient {
	http_client: Client,
	base_url: String,
	email: Option<String>,
}

impl MyMemoryClient {
	/// Creates a client with the given request timeout.
	pub fn new(timeout: Duration) -> Result<Self, TranslateError> {
		let http_client =
			motarjem_common_http::new_client_with_timeout(timeout).map_err(TranslateError::Client)?;

		Ok(Self {
			http_client,
			base_url: DEFAULT_BASE_URL.to_string(),
			email: None,
		})
	}

	/// Sets a custom endpoint (any service returning the MyMemory shape).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Sets the contact address sent as the `de` parameter, which raises the
	/// anonymous daily quota.
	pub fn with_email(mut self, email: Option<String>) -> Self {
		self.email = email.filter(|e| !e.trim().is_empty());
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Builds the request URL: percent-encoded text plus the `source|target` pair.
	pub fn request_url(&self, request: &TranslationRequest) -> String {
		let mut url = format!(
			"{}?q={}&langpair={}",
			self.base_url,
			urlencoding::encode(&request.text),
			request.pair
		);
		if let Some(email) = &self.email {
			url.push_str("&de=");
			url.push_str(&urlencoding::encode(email));
		}
		url
	}
}

#[async_trait]
impl TranslationService for MyMemoryClient {
	#[instrument(skip(self, request), fields(pair = %request.pair, chars = request.text.chars().count()))]
	async fn translate(&self, request: &TranslationRequest) -> Result<Value, TranslateError> {
		let url = self.request_url(request);
		debug!(base_url = %self.base_url, "sending translation request");

		let response = self.http_client.get(&url).send().await.map_err(|e| {
			if e.is_timeout() {
				error!("translation request timed out");
				return TranslateError::Timeout;
			}
			error!(error = %e, "network error during translation request");
			TranslateError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "received translation response");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			error!(status = status.as_u16(), body = %body, "translation API error");
			return Err(TranslateError::ApiError {
				status: status.as_u16(),
				message: body,
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "failed to read translation response body");
			TranslateError::Network(e)
		})?;
		trace!(body = %body, "translation response body");

		let payload: Value = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "failed to parse translation response");
			TranslateError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		// The service reports quota and validation problems inside a 200 body.
		if let Some(code) = payload.get("responseStatus").and_then(Value::as_u64) {
			if code != 200 {
				let details = payload
					.get("responseDetails")
					.and_then(Value::as_str)
					.unwrap_or_default();
				warn!(response_status = code, details = %details, "translation service reported a problem");
			}
		}

		Ok(payload)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Language, LanguagePair};
	use proptest::prelude::*;
	use reqwest::Url;

	fn client() -> MyMemoryClient {
		MyMemoryClient::new(Duration::from_secs(5)).unwrap()
	}

	#[test]
	fn test_client_creation() {
		let client = client();
		assert_eq!(client.base_url(), DEFAULT_BASE_URL);
		assert!(client.email.is_none());
	}

	#[test]
	fn test_with_base_url() {
		let client = client().with_base_url("http://localhost:9999/get");
		assert_eq!(client.base_url(), "http://localhost:9999/get");
	}

	#[test]
	fn test_blank_email_is_ignored() {
		let client = client().with_email(Some("  ".to_string()));
		assert!(client.email.is_none());
	}

	#[test]
	fn test_request_url_format() {
		let request = TranslationRequest::new(
			"hello world",
			LanguagePair::new(Language::En, Language::Fa),
		);
		assert_eq!(
			client().request_url(&request),
			"https://api.mymemory.translated.net/get?q=hello%20world&langpair=en|fa"
		);
	}

	#[test]
	fn test_request_url_with_email() {
		let request = TranslationRequest::new("hi", LanguagePair::new(Language::De, Language::Fa));
		let url = client()
			.with_email(Some("me+tr@example.com".to_string()))
			.request_url(&request);
		assert!(url.ends_with("&langpair=de|fa&de=me%2Btr%40example.com"));
	}

	proptest! {
		#[test]
		fn request_url_preserves_text(text in "\\PC{1,40}") {
			let request = TranslationRequest::new(text.clone(), LanguagePair::new(Language::Ru, Language::Fa));
			let url = Url::parse(&client().request_url(&request)).unwrap();
			let q = url.query_pairs().find(|(k, _)| k == "q").map(|(_, v)| v.into_owned());
			prop_assert_eq!(q, Some(text));
			let pair = url.query_pairs().find(|(k, _)| k == "langpair").map(|(_, v)| v.into_owned());
			prop_assert_eq!(pair, Some("ru|fa".to_string()));
		}
	}
}
