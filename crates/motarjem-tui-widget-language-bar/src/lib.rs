// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use motarjem_tui_core::{HorizontalStep, TextDirection};
use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Modifier, Style},
	widgets::StatefulWidget,
};
use unicode_width::UnicodeWidthStr;

const CHIP_GAP: u16 = 1;

fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
	let width = UnicodeWidthStr::width(s);
	if width <= max_width {
		return s.to_string();
	}
	if max_width == 0 {
		return String::new();
	}
	if max_width == 1 {
		return "…".to_string();
	}

	let mut result = String::new();
	let mut current_width = 0;
	let target_width = max_width.saturating_sub(1);

	for c in s.chars() {
		let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
		if current_width + char_width > target_width {
			break;
		}
		result.push(c);
		current_width += char_width;
	}
	result.push('…');
	result
}

fn chip_text(label: &str) -> String {
	format!(" {label} ")
}

/// Selection and horizontal scroll of a chip bar.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LanguageBarState {
	pub selected: usize,
	pub offset: usize,
}

impl LanguageBarState {
	pub fn new(selected: usize) -> Self {
		Self { selected, offset: 0 }
	}

	pub fn selected(&self) -> usize {
		self.selected
	}

	pub fn select_index(&mut self, index: usize, total: usize) {
		self.selected = index;
		self.clamp_to_total(total);
	}

	/// Move one chip in the on-screen direction of `step`. Stops at either end.
	/// Returns whether the selection changed.
	pub fn step(&mut self, step: HorizontalStep, direction: TextDirection, total: usize) -> bool {
		if total == 0 {
			return false;
		}
		let before = self.selected;
		match direction.logical_step(step) {
			delta if delta < 0 => self.selected = self.selected.saturating_sub(1),
			_ => self.selected = (self.selected + 1).min(total - 1),
		}
		before != self.selected
	}

	pub fn clamp_to_total(&mut self, total: usize) {
		if total == 0 {
			self.selected = 0;
			self.offset = 0;
			return;
		}
		self.selected = self.selected.min(total - 1);
		self.offset = self.offset.min(self.selected);
	}

	fn scroll_into_view(&mut self, widths: &[u16], available: u16) {
		if self.selected < self.offset {
			self.offset = self.selected;
		}
		while self.offset < self.selected && span_width(&widths[self.offset..=self.selected]) > available {
			self.offset += 1;
		}
	}
}

fn span_width(widths: &[u16]) -> u16 {
	let gaps = widths.len().saturating_sub(1) as u16 * CHIP_GAP;
	widths.iter().fold(gaps, |acc, w| acc.saturating_add(*w))
}

/// A row of selectable language chips, with an optional hint line below.
///
/// Under RTL the first chip sits at the right edge and chips run leftwards.
#[derive(Debug, Clone, Default)]
pub struct LanguageBar {
	labels: Vec<String>,
	hint: Option<String>,
	style: Style,
	chip_style: Style,
	active_style: Style,
	hint_style: Style,
	focused: bool,
	direction: TextDirection,
}

impl LanguageBar {
	pub fn new<I, S>(labels: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			labels: labels.into_iter().map(Into::into).collect(),
			..Default::default()
		}
	}

	pub fn hint(mut self, hint: impl Into<String>) -> Self {
		self.hint = Some(hint.into());
		self
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	pub fn chip_style(mut self, style: Style) -> Self {
		self.chip_style = style;
		self
	}

	pub fn active_style(mut self, style: Style) -> Self {
		self.active_style = style;
		self
	}

	pub fn hint_style(mut self, style: Style) -> Self {
		self.hint_style = style;
		self
	}

	/// Underline the active chip while the bar has keyboard focus.
	pub fn focused(mut self, focused: bool) -> Self {
		self.focused = focused;
		self
	}

	pub fn direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}
}

impl StatefulWidget for LanguageBar {
	type State = LanguageBarState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		buf.set_style(area, self.style);
		state.clamp_to_total(self.labels.len());

		let max_chip = area.width as usize;
		let chips: Vec<String> = self
			.labels
			.iter()
			.map(|label| truncate_with_ellipsis(&chip_text(label), max_chip))
			.collect();
		let widths: Vec<u16> = chips.iter().map(|c| UnicodeWidthStr::width(c.as_str()) as u16).collect();

		if !chips.is_empty() {
			state.scroll_into_view(&widths, area.width);
		}

		let is_rtl = self.direction.is_rtl();
		let mut used: u16 = 0;
		for (index, chip) in chips.iter().enumerate().skip(state.offset) {
			let width = widths[index];
			let gap = if index > state.offset { CHIP_GAP } else { 0 };
			if used + gap + width > area.width {
				break;
			}
			used += gap;

			let x = if is_rtl {
				area.right() - used - width
			} else {
				area.x + used
			};

			let chip_style = if index == state.selected {
				let active = self.active_style.add_modifier(Modifier::BOLD);
				if self.focused {
					active.add_modifier(Modifier::UNDERLINED)
				} else {
					active
				}
			} else {
				self.chip_style
			};
			buf.set_stringn(x, area.y, chip, width as usize, chip_style);
			used += width;
		}

		if area.height < 2 {
			return;
		}
		if let Some(hint) = self.hint {
			let text = truncate_with_ellipsis(&hint, area.width as usize);
			let width = UnicodeWidthStr::width(text.as_str()) as u16;
			let x = area.x + self.direction.align_start(area.width, width);
			buf.set_stringn(x, area.y + 1, &text, width as usize, self.hint_style);
		}
	}
}
