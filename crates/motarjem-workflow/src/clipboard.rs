// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The platform clipboard seam.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::ClipboardError;

pub trait Clipboard: Send {
	fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies through the terminal with an OSC 52 escape sequence.
///
/// The terminal emulator owns the system clipboard; the sequence is written
/// to the same stream the UI renders to.
pub struct Osc52Clipboard<W: Write + Send> {
	out: W,
}

impl<W: Write + Send> Osc52Clipboard<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}

	pub fn into_inner(self) -> W {
		self.out
	}
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
	fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
		let payload = STANDARD.encode(text.as_bytes());
		write!(self.out, "\x1b]52;c;{payload}\x07")?;
		self.out.flush()?;
		tracing::debug!(bytes = text.len(), "copied text via OSC 52");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn writes_base64_osc52_sequence() {
		let mut clipboard = Osc52Clipboard::new(Vec::new());
		clipboard.set_text("سلام").unwrap();
		let written = String::from_utf8(clipboard.into_inner()).unwrap();
		assert_eq!(written, format!("\x1b]52;c;{}\x07", STANDARD.encode("سلام")));
	}
}
