// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the translation client.

use thiserror::Error;

/// Errors that can occur when talking to the translation service.
///
/// Callers on the screen collapse every variant into one user-facing
/// message; the variants exist for logging.
#[derive(Debug, Error)]
pub enum TranslateError {
	/// The HTTP client could not be constructed.
	#[error("Failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	#[error("Request timed out")]
	Timeout,

	/// The service answered with a non-success status.
	#[error("Translation API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// The body was not valid JSON.
	#[error("Invalid response from translation API: {0}")]
	InvalidResponse(String),
}

/// A language code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code: {0}")]
pub struct UnsupportedLanguage(pub String);
