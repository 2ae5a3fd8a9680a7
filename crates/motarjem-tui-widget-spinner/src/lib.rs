// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! A spinner widget for ratatui TUI applications.
//!
//! # Example
//!
//! ```no_run
//! use motarjem_tui_widget_spinner::{Spinner, SpinnerKind, SpinnerState};
//!
//! let mut state = SpinnerState::default();
//! let spinner = Spinner::from_label("Translating...")
//!     .kind(SpinnerKind::Dots);
//!
//! // In your event loop, call state.tick() at regular intervals.
//! state.tick();
//! ```

use motarjem_tui_core::TextDirection;
use ratatui::layout::Alignment;
use ratatui::prelude::*;
use ratatui::widgets::StatefulWidget;
use unicode_width::UnicodeWidthStr;

const DOTS_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const LINE_FRAMES: &[&str] = &["-", "\\", "|", "/"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerKind {
	#[default]
	Dots,
	Line,
}

impl SpinnerKind {
	pub fn frames(&self) -> &'static [&'static str] {
		match self {
			SpinnerKind::Dots => DOTS_FRAMES,
			SpinnerKind::Line => LINE_FRAMES,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct SpinnerState {
	frame: usize,
}

impl SpinnerState {
	pub fn tick(&mut self) {
		self.frame = self.frame.wrapping_add(1);
	}

	pub fn reset(&mut self) {
		self.frame = 0;
	}

	pub fn frame(&self) -> usize {
		self.frame
	}
}

#[derive(Clone, Debug)]
pub struct Spinner {
	label: Option<String>,
	text_style: Style,
	kind: SpinnerKind,
	alignment: Alignment,
	direction: TextDirection,
}

impl Spinner {
	pub fn new() -> Self {
		Self {
			label: None,
			text_style: Style::default(),
			kind: SpinnerKind::default(),
			alignment: Alignment::Left,
			direction: TextDirection::Ltr,
		}
	}

	pub fn from_label(label: impl Into<String>) -> Self {
		Self::new().label(label)
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn text_style(mut self, style: Style) -> Self {
		self.text_style = style;
		self
	}

	pub fn kind(mut self, kind: SpinnerKind) -> Self {
		self.kind = kind;
		self
	}

	pub fn alignment(mut self, alignment: Alignment) -> Self {
		self.alignment = alignment;
		self
	}

	/// Under RTL the frame follows the label so it sits at the reading start.
	pub fn direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}

	fn text(&self, frame_char: &str) -> String {
		match (&self.label, self.direction) {
			(Some(label), TextDirection::Ltr) => format!("{frame_char} {label}"),
			(Some(label), TextDirection::Rtl) => format!("{label} {frame_char}"),
			(None, _) => frame_char.to_string(),
		}
	}
}

impl Default for Spinner {
	fn default() -> Self {
		Self::new()
	}
}

impl StatefulWidget for Spinner {
	type State = SpinnerState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let frames = self.kind.frames();
		let frame_char = frames[state.frame % frames.len()];
		let text = self.text(frame_char);

		let width = (UnicodeWidthStr::width(text.as_str()) as u16).min(area.width);
		let offset = match self.alignment {
			Alignment::Left => 0,
			Alignment::Center => (area.width - width) / 2,
			Alignment::Right => area.width - width,
		};

		buf.set_stringn(
			area.x + offset,
			area.y,
			&text,
			area.width as usize,
			self.text_style,
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tick_advances_frame() {
		let mut state = SpinnerState::default();
		state.tick();
		state.tick();
		assert_eq!(state.frame(), 2);
		state.reset();
		assert_eq!(state.frame(), 0);
	}

	#[test]
	fn rtl_puts_frame_after_label() {
		let spinner = Spinner::from_label("در حال ترجمه").direction(TextDirection::Rtl);
		assert_eq!(spinner.text("-"), "در حال ترجمه -");
		let spinner = Spinner::from_label("Translating").kind(SpinnerKind::Line);
		assert_eq!(spinner.text("-"), "- Translating");
	}
}
