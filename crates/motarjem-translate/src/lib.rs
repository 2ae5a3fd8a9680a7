// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Translation service client for Motarjem.
//!
//! This crate owns the contract with the external translation service:
//! the closed set of supported languages, the request URL format, the
//! [`TranslationService`] seam and the ordered extractor chain that turns a
//! response payload into a displayable string.

pub mod client;
pub mod error;
pub mod extract;
pub mod language;
pub mod types;

pub use client::{MyMemoryClient, TranslationService, DEFAULT_BASE_URL};
pub use error::{TranslateError, UnsupportedLanguage};
pub use extract::{Extractor, ExtractorChain};
pub use language::Language;
pub use types::{LanguagePair, TranslationRequest};
