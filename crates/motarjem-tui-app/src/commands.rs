// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One-shot commands.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, instrument};

use motarjem_common_i18n::t;
use motarjem_translate::{Language, TranslationService};
use motarjem_workflow::{Session, TranslationController};

/// Runs the same workflow as the screen and prints whatever it would show.
/// Every outcome exits successfully.
#[instrument(skip_all, fields(source = %session.state().source, target = %session.state().target))]
pub async fn translate(session: Session, service: Arc<dyn TranslationService>, text: String) -> Result<()> {
	let mut controller = TranslationController::new(session, service);
	controller.session_mut().set_input(text);

	let outcome = controller.submit().await;
	info!(outcome = ?outcome, "one-shot translation finished");

	let mut stdout = io::stdout().lock();
	writeln!(stdout, "{}", controller.session().state().result_text)?;
	Ok(())
}

pub fn languages(locale: &str) {
	for line in language_lines(locale) {
		println!("{line}");
	}
}

fn language_lines(locale: &str) -> Vec<String> {
	Language::ALL
		.iter()
		.map(|language| {
			let name = t(locale, &format!("client.language.{}", language.code()));
			format!("{}\t{}\t{}\t{}", language.code(), language.native_label(), name, language.hint())
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_language_lines_cover_every_language() {
		let lines = language_lines("en");
		assert_eq!(lines.len(), Language::ALL.len());
		assert_eq!(lines[0], "en\tEnglish\tEnglish\tHello world");
		assert!(lines.iter().any(|l| l.starts_with("fa\tفارسی\tPersian\t")));
	}

	#[test]
	fn test_language_names_follow_locale() {
		let lines = language_lines("fa");
		assert!(lines[0].starts_with("en\tEnglish\t"));
		assert!(!lines[0].contains("\tEnglish\tHello"));
	}
}
