// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use motarjem_translate::Language;
use thiserror::Error;

use crate::mode::ScreenMode;

#[derive(Debug, Error)]
pub enum WorkflowError {
	#[error("swap is not available in {0} mode")]
	SwapUnavailable(ScreenMode),

	#[error("{language} cannot be selected as {role} in {mode} mode")]
	LanguageNotSelectable {
		language: Language,
		role: &'static str,
		mode: ScreenMode,
	},

	#[error("clipboard error: {0}")]
	Clipboard(#[from] ClipboardError),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("clipboard unavailable: {0}")]
	Unavailable(String),
}
