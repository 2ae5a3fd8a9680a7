// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The screen's session state and its transitions.

use motarjem_common_i18n::t;
use motarjem_translate::{Language, LanguagePair, TranslationRequest};
use tracing::{debug, info};

use crate::clipboard::Clipboard;
use crate::error::{ClipboardError, WorkflowError};
use crate::mode::{ScreenMode, ThemeMode};

const MSG_ENTER_TEXT: &str = "client.status.enter_text";
const MSG_NO_TRANSLATION: &str = "client.status.no_translation";
const MSG_CONNECTION_ERROR: &str = "client.status.connection_error";

/// How the last finished submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// Empty input; no request was issued.
	Rejected,
	/// A translation was extracted from the payload.
	Success,
	/// The service answered but no extractor produced a value.
	Empty,
	/// Transport, status or parse failure.
	Error,
}

impl Outcome {
	fn message_key(&self) -> Option<&'static str> {
		match self {
			Outcome::Rejected => Some(MSG_ENTER_TEXT),
			Outcome::Empty => Some(MSG_NO_TRANSLATION),
			Outcome::Error => Some(MSG_CONNECTION_ERROR),
			Outcome::Success => None,
		}
	}
}

/// What a finished request produced, after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
	Translated(String),
	NoTranslation,
	Failed,
}

/// Identifies one accepted submission. Later submissions get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
	pub fn value(&self) -> u64 {
		self.0
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
	pub ticket: Ticket,
	pub request: TranslationRequest,
}

/// Result of [`Session::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
	Rejected { superseded: Option<Ticket> },
	Pending {
		pending: PendingRequest,
		superseded: Option<Ticket>,
	},
}

impl Submission {
	/// The in-flight submission this one replaced, if any.
	pub fn superseded(&self) -> Option<Ticket> {
		match self {
			Submission::Rejected { superseded } | Submission::Pending { superseded, .. } => *superseded,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
	pub input_text: String,
	pub source: Language,
	pub target: Language,
	pub is_loading: bool,
	pub result_text: String,
	pub theme: ThemeMode,
	pub last_outcome: Option<Outcome>,
}

/// One screen's worth of translation state.
///
/// All transitions are synchronous; the request itself is issued by the
/// caller using the [`PendingRequest`] handed out by [`Session::begin_submit`].
#[derive(Debug, Clone)]
pub struct Session {
	state: SessionState,
	mode: ScreenMode,
	locale: String,
	next_ticket: u64,
	in_flight: Option<Ticket>,
}

impl Session {
	pub fn new(mode: ScreenMode, locale: impl Into<String>) -> Self {
		Self {
			state: SessionState {
				input_text: String::new(),
				source: Language::En,
				target: Language::DEFAULT_TARGET,
				is_loading: false,
				result_text: String::new(),
				theme: ThemeMode::default(),
				last_outcome: None,
			},
			mode,
			locale: locale.into(),
			next_ticket: 0,
			in_flight: None,
		}
	}

	/// Applies a starting language pair, validated against the mode.
	pub fn with_languages(mut self, source: Language, target: Language) -> Result<Self, WorkflowError> {
		if self.mode == ScreenMode::TwoWay {
			self.select_target(target)?;
		} else if target != Language::DEFAULT_TARGET {
			return Err(WorkflowError::LanguageNotSelectable {
				language: target,
				role: "target",
				mode: self.mode,
			});
		}
		self.select_source(source)?;
		Ok(self)
	}

	pub fn with_theme(mut self, theme: ThemeMode) -> Self {
		self.state.theme = theme;
		self
	}

	pub fn state(&self) -> &SessionState {
		&self.state
	}

	pub fn mode(&self) -> ScreenMode {
		self.mode
	}

	pub fn locale(&self) -> &str {
		&self.locale
	}

	pub fn in_flight(&self) -> Option<Ticket> {
		self.in_flight
	}

	/// Languages offered for the source chip bar.
	pub fn source_choices(&self) -> Vec<Language> {
		match self.mode {
			ScreenMode::FixedTarget => Language::sources_for(self.state.target),
			ScreenMode::TwoWay => Language::ALL.to_vec(),
		}
	}

	/// Languages offered for the target chip bar.
	pub fn target_choices(&self) -> Vec<Language> {
		match self.mode {
			ScreenMode::FixedTarget => vec![Language::DEFAULT_TARGET],
			ScreenMode::TwoWay => Language::ALL.to_vec(),
		}
	}

	pub fn set_input(&mut self, text: impl Into<String>) {
		self.state.input_text = text.into();
	}

	/// Changes the source language.
	///
	/// In two-way mode picking the current target exchanges the pair so source
	/// and target stay distinct.
	pub fn select_source(&mut self, language: Language) -> Result<(), WorkflowError> {
		if !self.source_choices().contains(&language) {
			return Err(WorkflowError::LanguageNotSelectable {
				language,
				role: "source",
				mode: self.mode,
			});
		}
		if language == self.state.target {
			self.state.target = self.state.source;
		}
		self.state.source = language;
		Ok(())
	}

	pub fn select_target(&mut self, language: Language) -> Result<(), WorkflowError> {
		if !self.target_choices().contains(&language) {
			return Err(WorkflowError::LanguageNotSelectable {
				language,
				role: "target",
				mode: self.mode,
			});
		}
		if language == self.state.source {
			self.state.source = self.state.target;
		}
		self.state.target = language;
		Ok(())
	}

	pub fn toggle_theme(&mut self) -> ThemeMode {
		self.state.theme = self.state.theme.toggled();
		self.state.theme
	}

	/// Switches the message locale, re-rendering a displayed status message.
	pub fn set_locale(&mut self, locale: impl Into<String>) {
		self.locale = locale.into();
		if let Some(key) = self.state.last_outcome.and_then(|o| o.message_key()) {
			if !self.state.result_text.is_empty() {
				self.state.result_text = t(&self.locale, key);
			}
		}
	}

	/// Empties input and result. An in-flight request is left to finish.
	pub fn clear(&mut self) {
		self.state.input_text.clear();
		self.state.result_text.clear();
		self.state.last_outcome = None;
	}

	/// Starts a submission for the current input.
	///
	/// Empty-after-trim input is rejected locally with the prompt message.
	/// Either way, any in-flight submission is superseded and its completion
	/// will be ignored.
	pub fn begin_submit(&mut self) -> Submission {
		let superseded = self.in_flight.take();
		if let Some(old) = superseded {
			debug!(ticket = old.value(), "superseding in-flight translation");
		}

		let text = self.state.input_text.trim();
		if text.is_empty() {
			self.state.is_loading = false;
			self.finish(Outcome::Rejected, None);
			return Submission::Rejected { superseded };
		}

		self.next_ticket += 1;
		let ticket = Ticket(self.next_ticket);
		let request = TranslationRequest::new(text, LanguagePair::new(self.state.source, self.state.target));

		self.in_flight = Some(ticket);
		self.state.is_loading = true;
		self.state.result_text.clear();
		info!(ticket = ticket.value(), pair = %request.pair, "translation submitted");

		Submission::Pending {
			pending: PendingRequest { ticket, request },
			superseded,
		}
	}

	/// Applies a finished request. Returns `false` for stale tickets, which
	/// leave the state untouched.
	pub fn complete(&mut self, ticket: Ticket, reply: Reply) -> bool {
		if self.in_flight != Some(ticket) {
			debug!(ticket = ticket.value(), "discarding stale completion");
			return false;
		}
		self.in_flight = None;
		self.state.is_loading = false;

		match reply {
			Reply::Translated(text) => self.finish(Outcome::Success, Some(text)),
			Reply::NoTranslation => self.finish(Outcome::Empty, None),
			Reply::Failed => self.finish(Outcome::Error, None),
		}
		true
	}

	/// Exchanges the language pair and moves the result into the input.
	///
	/// A request still in flight was made for the old pair; it is superseded
	/// and its ticket returned so the caller can abort it.
	pub fn swap(&mut self) -> Result<Option<Ticket>, WorkflowError> {
		if !self.mode.allows_swap() {
			return Err(WorkflowError::SwapUnavailable(self.mode));
		}
		let superseded = self.in_flight.take();
		if let Some(old) = superseded {
			debug!(ticket = old.value(), "swap supersedes in-flight translation");
			self.state.is_loading = false;
		}
		std::mem::swap(&mut self.state.source, &mut self.state.target);
		self.state.input_text = std::mem::take(&mut self.state.result_text);
		self.state.last_outcome = None;
		debug!(source = %self.state.source, target = %self.state.target, "swapped languages");
		Ok(superseded)
	}

	/// Hands the trimmed result to the clipboard. Returns `false` when there is
	/// nothing to copy.
	pub fn copy_result(&self, clipboard: &mut dyn Clipboard) -> Result<bool, ClipboardError> {
		let text = self.state.result_text.trim();
		if text.is_empty() {
			return Ok(false);
		}
		clipboard.set_text(text)?;
		Ok(true)
	}

	pub fn has_copyable_result(&self) -> bool {
		!self.state.result_text.trim().is_empty()
	}

	fn finish(&mut self, outcome: Outcome, text: Option<String>) {
		self.state.result_text = match (text, outcome.message_key()) {
			(Some(text), _) => text,
			(None, Some(key)) => t(&self.locale, key),
			(None, None) => String::new(),
		};
		self.state.last_outcome = Some(outcome);
	}
}
