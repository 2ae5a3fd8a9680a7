// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Couples a [`Session`] with the translation service.

use std::sync::Arc;

use motarjem_translate::{ExtractorChain, TranslationRequest, TranslationService};
use tracing::{error, warn};

use crate::session::{Outcome, Reply, Session, Submission};

/// Runs one request and reduces its payload to a [`Reply`].
///
/// Every failure kind collapses to [`Reply::Failed`] after being logged.
pub async fn fetch_reply(
	service: &dyn TranslationService,
	extractors: &ExtractorChain,
	request: &TranslationRequest,
) -> Reply {
	match service.translate(request).await {
		Ok(payload) => match extractors.extract(&payload) {
			Some(text) => Reply::Translated(text),
			None => {
				warn!(pair = %request.pair, "translation payload had no usable text");
				Reply::NoTranslation
			}
		},
		Err(e) => {
			error!(error = %e, pair = %request.pair, "translation failed");
			Reply::Failed
		}
	}
}

pub struct TranslationController {
	session: Session,
	service: Arc<dyn TranslationService>,
	extractors: ExtractorChain,
}

impl TranslationController {
	pub fn new(session: Session, service: Arc<dyn TranslationService>) -> Self {
		Self {
			session,
			service,
			extractors: ExtractorChain::default(),
		}
	}

	pub fn with_extractors(mut self, extractors: ExtractorChain) -> Self {
		self.extractors = extractors;
		self
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	pub fn session_mut(&mut self) -> &mut Session {
		&mut self.session
	}

	/// Shared handle for running requests off the UI loop.
	pub fn service(&self) -> Arc<dyn TranslationService> {
		Arc::clone(&self.service)
	}

	pub fn extractors(&self) -> &ExtractorChain {
		&self.extractors
	}

	/// Submits the current input and waits for the result.
	///
	/// The interactive screen instead drives [`Session::begin_submit`] and
	/// [`Session::complete`] itself so it can keep rendering while waiting.
	pub async fn submit(&mut self) -> Outcome {
		let pending = match self.session.begin_submit() {
			Submission::Rejected { .. } => return Outcome::Rejected,
			Submission::Pending { pending, .. } => pending,
		};

		let reply = fetch_reply(self.service.as_ref(), &self.extractors, &pending.request).await;
		self.session.complete(pending.ticket, reply);
		self.session.state().last_outcome.unwrap_or(Outcome::Error)
	}
}
