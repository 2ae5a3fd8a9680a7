// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use motarjem_tui_core::TextDirection;
use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Style, Stylize},
	text::{Line, Span},
	widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone)]
pub struct StatusItem {
	pub label: String,
	pub value: String,
}

/// One-row bar: status items at the reading start, key shortcuts at the end.
///
/// Shortcuts win when space runs out; items are truncated with an ellipsis.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
	items: Vec<StatusItem>,
	shortcuts: Vec<(String, String)>,
	message: Option<String>,
	style: Style,
	key_style: Style,
	message_style: Style,
	direction: TextDirection,
}

impl StatusBar {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn item(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
		self.items.push(StatusItem {
			label: label.into(),
			value: value.into(),
		});
		self
	}

	pub fn shortcut(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
		self.shortcuts.push((key.into(), desc.into()));
		self
	}

	/// A transient notice shown in place of the items.
	pub fn message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	pub fn key_style(mut self, style: Style) -> Self {
		self.key_style = style;
		self
	}

	pub fn message_style(mut self, style: Style) -> Self {
		self.message_style = style;
		self
	}

	pub fn direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}

	fn shortcut_line(&self) -> Line<'_> {
		let mut spans = Vec::new();
		for (i, (key, desc)) in self.shortcuts.iter().enumerate() {
			if i > 0 {
				spans.push(Span::raw(" | "));
			}
			spans.push(Span::styled(key.as_str(), self.key_style).bold());
			spans.push(Span::raw(" "));
			spans.push(Span::raw(desc.as_str()));
		}
		Line::from(spans)
	}

	fn items_line(&self, max_width: usize) -> Line<'_> {
		if let Some(ref message) = self.message {
			return Line::from(Span::styled(truncate_with_ellipsis(message, max_width), self.message_style));
		}

		let mut spans = Vec::new();
		let mut used = 0usize;
		for (i, item) in self.items.iter().enumerate() {
			let separator = if i > 0 { " | " } else { "" };
			let text = format!("{separator}{}: {}", item.label, item.value);
			let width = UnicodeWidthStr::width(text.as_str());

			if used + width > max_width {
				let remaining = max_width - used;
				if remaining > 3 {
					spans.push(Span::raw(truncate_with_ellipsis(&text, remaining)));
				}
				break;
			}

			if i > 0 {
				spans.push(Span::raw(" | "));
			}
			spans.push(Span::raw(item.label.clone()).bold());
			spans.push(Span::raw(": "));
			spans.push(Span::raw(item.value.clone()));
			used += width;
		}
		Line::from(spans)
	}
}

fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
	if UnicodeWidthStr::width(s) <= max_width {
		return s.to_string();
	}
	if max_width == 0 {
		return String::new();
	}

	let mut result = String::new();
	let mut current_width = 0;
	let target_width = max_width - 1;
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

impl Widget for StatusBar {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		buf.set_style(area, self.style);

		let shortcut_line = self.shortcut_line();
		let shortcut_width = (shortcut_line.width() as u16).min(area.width);
		let available_for_items = area.width.saturating_sub(shortcut_width + 1);
		let item_line = self.items_line(available_for_items as usize);
		let item_width = (item_line.width() as u16).min(available_for_items);

		let (items_x, shortcut_x) = if self.direction.is_rtl() {
			(area.right() - item_width, area.x)
		} else {
			(area.x, area.right() - shortcut_width)
		};

		buf.set_line(shortcut_x, area.y, &shortcut_line, shortcut_width);
		if item_width > 0 {
			buf.set_line(items_x, area.y, &item_line, item_width);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use motarjem_tui_testing::TestHarness;

	#[test]
	fn test_ltr_items_start_shortcuts_end() {
		let mut harness = TestHarness::new(40, 1);
		harness.render(|frame, area, _| {
			let bar = StatusBar::new().item("Mode", "two-way").shortcut("Esc", "Quit");
			frame.render_widget(bar, area);
		});
		assert_eq!(harness.find_text("Mode: two-way"), Some((0, 0)));
		assert_eq!(harness.find_text("Esc Quit"), Some((0, 32)));
	}

	#[test]
	fn test_rtl_mirrors() {
		let mut harness = TestHarness::new(40, 1);
		harness.render(|frame, area, _| {
			let bar = StatusBar::new()
				.item("Mode", "two-way")
				.shortcut("Esc", "Quit")
				.direction(TextDirection::Rtl);
			frame.render_widget(bar, area);
		});
		assert_eq!(harness.find_text("Esc Quit"), Some((0, 0)));
		assert_eq!(harness.find_text("Mode: two-way"), Some((0, 27)));
	}

	#[test]
	fn test_message_replaces_items() {
		let mut harness = TestHarness::new(40, 1);
		harness.render(|frame, area, _| {
			let bar = StatusBar::new().item("Mode", "two-way").message("Copied");
			frame.render_widget(bar, area);
		});
		assert!(harness.contains("Copied"));
		assert!(!harness.contains("Mode"));
	}

	#[test]
	fn test_items_truncate_before_shortcuts() {
		let mut harness = TestHarness::new(24, 1);
		harness.render(|frame, area, _| {
			let bar = StatusBar::new()
				.item("Language", "English to Persian")
				.shortcut("Tab", "Focus");
			frame.render_widget(bar, area);
		});
		let lines = harness.buffer_lines();
		let line = &lines[0];
		assert!(line.ends_with("Tab Focus"));
		assert!(line.contains('…'));
	}

	#[test]
	fn test_truncate_with_ellipsis() {
		assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
		assert_eq!(truncate_with_ellipsis("hello", 4), "hel…");
		assert_eq!(truncate_with_ellipsis("hello", 0), "");
	}
}
