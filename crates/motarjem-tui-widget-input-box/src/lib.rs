// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use motarjem_tui_core::TextDirection;
use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Color, Style},
	widgets::StatefulWidget,
};
use unicode_segmentation::UnicodeSegmentation;

/// Editable text with a byte-indexed cursor that always sits on a grapheme
/// boundary.
#[derive(Debug, Default, Clone)]
pub struct InputBoxState {
	content: String,
	cursor_position: usize,
	scroll_offset: usize,
}

impl InputBoxState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the content and puts the cursor at the end.
	pub fn set_content(&mut self, content: impl Into<String>) {
		self.content = content.into();
		self.cursor_position = self.content.len();
		self.scroll_offset = 0;
	}

	pub fn insert_char(&mut self, c: char) {
		self.content.insert(self.cursor_position, c);
		self.cursor_position += c.len_utf8();
	}

	pub fn insert_str(&mut self, text: &str) {
		let text = text.replace("\r\n", "\n");
		self.content.insert_str(self.cursor_position, &text);
		self.cursor_position += text.len();
	}

	pub fn delete_char(&mut self) {
		if self.cursor_position > 0 {
			let prev_grapheme_start = self.prev_boundary();
			self.content.drain(prev_grapheme_start..self.cursor_position);
			self.cursor_position = prev_grapheme_start;
		}
	}

	pub fn delete_char_forward(&mut self) {
		if self.cursor_position < self.content.len() {
			let next = self.next_boundary();
			self.content.drain(self.cursor_position..next);
		}
	}

	pub fn move_cursor_left(&mut self) {
		self.cursor_position = self.prev_boundary();
	}

	pub fn move_cursor_right(&mut self) {
		self.cursor_position = self.next_boundary();
	}

	pub fn move_cursor_start(&mut self) {
		self.cursor_position = 0;
	}

	pub fn move_cursor_end(&mut self) {
		self.cursor_position = self.content.len();
	}

	pub fn move_cursor_prev_word(&mut self) {
		self.cursor_position = self.prev_word_start();
	}

	pub fn move_cursor_next_word(&mut self) {
		self.cursor_position = self.next_word_start();
	}

	pub fn delete_prev_word(&mut self) {
		let start = self.prev_word_start();
		self.content.drain(start..self.cursor_position);
		self.cursor_position = start;
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn is_empty(&self) -> bool {
		self.content.is_empty()
	}

	pub fn clear(&mut self) {
		self.content.clear();
		self.cursor_position = 0;
		self.scroll_offset = 0;
	}

	pub fn cursor_position(&self) -> usize {
		self.cursor_position
	}

	pub fn scroll_offset(&self) -> usize {
		self.scroll_offset
	}

	/// Applies an editing key. Returns `true` when content or cursor changed.
	///
	/// Horizontal arrows move in visual order, so under RTL Left advances the
	/// cursor.
	pub fn handle_key(&mut self, key: &KeyEvent, direction: TextDirection) -> bool {
		let before = (self.content.len(), self.cursor_position);
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let alt = key.modifiers.contains(KeyModifiers::ALT);
		let forward = |code: KeyCode| match (code, direction) {
			(KeyCode::Right, TextDirection::Ltr) | (KeyCode::Left, TextDirection::Rtl) => Some(true),
			(KeyCode::Left, TextDirection::Ltr) | (KeyCode::Right, TextDirection::Rtl) => Some(false),
			_ => None,
		};

		match key.code {
			KeyCode::Char('w') if ctrl => self.delete_prev_word(),
			KeyCode::Char(c) if !ctrl && !alt => self.insert_char(c),
			KeyCode::Enter if alt => self.insert_char('\n'),
			KeyCode::Backspace if ctrl || alt => self.delete_prev_word(),
			KeyCode::Backspace => self.delete_char(),
			KeyCode::Delete => self.delete_char_forward(),
			KeyCode::Home => self.move_cursor_start(),
			KeyCode::End => self.move_cursor_end(),
			code @ (KeyCode::Left | KeyCode::Right) => match (forward(code), ctrl) {
				(Some(true), true) => self.move_cursor_next_word(),
				(Some(true), false) => self.move_cursor_right(),
				(Some(false), true) => self.move_cursor_prev_word(),
				(Some(false), false) => self.move_cursor_left(),
				(None, _) => {}
			},
			_ => return false,
		}

		before != (self.content.len(), self.cursor_position)
	}

	fn prev_boundary(&self) -> usize {
		self.content[..self.cursor_position]
			.grapheme_indices(true)
			.next_back()
			.map(|(i, _)| i)
			.unwrap_or(0)
	}

	fn next_boundary(&self) -> usize {
		self.content[self.cursor_position..]
			.graphemes(true)
			.next()
			.map(|g| self.cursor_position + g.len())
			.unwrap_or(self.content.len())
	}

	fn prev_word_start(&self) -> usize {
		let before_cursor = &self.content[..self.cursor_position];
		let mut new_pos = 0;
		let mut found_word = false;
		for (i, grapheme) in before_cursor.grapheme_indices(true).rev() {
			let is_whitespace = grapheme.chars().all(char::is_whitespace);
			if !found_word {
				if !is_whitespace {
					found_word = true;
				}
			} else if is_whitespace {
				new_pos = i + grapheme.len();
				break;
			}
		}
		new_pos
	}

	fn next_word_start(&self) -> usize {
		let after_cursor = &self.content[self.cursor_position..];
		let mut offset = 0;
		let mut found_whitespace = false;
		for (i, grapheme) in after_cursor.grapheme_indices(true) {
			let is_whitespace = grapheme.chars().all(char::is_whitespace);
			if !found_whitespace {
				if is_whitespace {
					found_whitespace = true;
				}
			} else if !is_whitespace {
				offset = i;
				break;
			}
			offset = i + grapheme.len();
		}
		self.cursor_position + offset
	}
}

/// Rows of graphemes after hard breaks and wrapping, plus the cursor's
/// `(row, column)`.
struct Wrapped<'a> {
	rows: Vec<Vec<&'a str>>,
	cursor: (usize, usize),
}

fn wrap(content: &str, cursor: usize, width: usize) -> Wrapped<'_> {
	let mut rows: Vec<Vec<&str>> = vec![Vec::new()];
	let mut cursor_at = None;

	for (i, g) in content.grapheme_indices(true) {
		let is_break = g == "\n" || g == "\r\n";
		if !is_break && rows.last().map_or(0, Vec::len) == width {
			rows.push(Vec::new());
		}
		if i == cursor {
			cursor_at = Some((rows.len() - 1, rows.last().map_or(0, Vec::len)));
		}
		if is_break {
			rows.push(Vec::new());
		} else if let Some(row) = rows.last_mut() {
			row.push(g);
		}
	}

	let cursor = match cursor_at {
		Some(at) => at,
		None => {
			if rows.last().map_or(0, Vec::len) == width {
				rows.push(Vec::new());
			}
			(rows.len() - 1, rows.last().map_or(0, Vec::len))
		}
	};

	Wrapped { rows, cursor }
}

#[derive(Debug, Clone)]
pub struct InputBox {
	placeholder: Option<String>,
	style: Style,
	placeholder_style: Style,
	cursor_style: Style,
	focused: bool,
	direction: TextDirection,
}

impl Default for InputBox {
	fn default() -> Self {
		Self::new()
	}
}

impl InputBox {
	pub fn new() -> Self {
		Self {
			placeholder: None,
			style: Style::default(),
			placeholder_style: Style::default().fg(Color::DarkGray),
			cursor_style: Style::default().bg(Color::White).fg(Color::Black),
			focused: false,
			direction: TextDirection::Ltr,
		}
	}

	pub fn placeholder(mut self, text: impl Into<String>) -> Self {
		self.placeholder = Some(text.into());
		self
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	pub fn placeholder_style(mut self, style: Style) -> Self {
		self.placeholder_style = style;
		self
	}

	pub fn cursor_style(mut self, style: Style) -> Self {
		self.cursor_style = style;
		self
	}

	pub fn focused(mut self, focused: bool) -> Self {
		self.focused = focused;
		self
	}

	pub fn direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}

	fn row_start_x(&self, area: Rect, row_width: u16) -> u16 {
		if self.direction.is_rtl() {
			area.x + area.width.saturating_sub(row_width)
		} else {
			area.x
		}
	}
}

impl StatefulWidget for InputBox {
	type State = InputBoxState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let width = area.width as usize;
		let height = area.height as usize;
		let is_rtl = self.direction.is_rtl();

		if state.content.is_empty() {
			let display: Vec<&str> = self
				.placeholder
				.as_deref()
				.map(|placeholder| placeholder.graphemes(true).take(width).collect())
				.unwrap_or_default();
			let start_x = self.row_start_x(area, display.len() as u16);
			for (i, g) in display.iter().enumerate() {
				buf.set_string(start_x + i as u16, area.y, *g, self.placeholder_style);
			}
			if self.focused {
				// The cursor sits at the reading start and keeps the glyph under it.
				let (cursor_x, symbol) = if is_rtl {
					(area.right() - 1, display.last().copied())
				} else {
					(area.x, display.first().copied())
				};
				buf.set_string(cursor_x, area.y, symbol.unwrap_or(" "), self.cursor_style);
			}
			return;
		}

		let wrapped = wrap(&state.content, state.cursor_position, width);
		let (cursor_row, cursor_col) = wrapped.cursor;

		if cursor_row < state.scroll_offset {
			state.scroll_offset = cursor_row;
		} else if cursor_row >= state.scroll_offset + height {
			state.scroll_offset = cursor_row + 1 - height;
		}

		for (offset, row) in wrapped.rows.iter().skip(state.scroll_offset).take(height).enumerate() {
			let y = area.y + offset as u16;
			let row_width = row.len() as u16;
			let start_x = self.row_start_x(area, row_width);
			for (i, g) in row.iter().enumerate() {
				buf.set_string(start_x + i as u16, y, *g, self.style);
			}

			let row_index = state.scroll_offset + offset;
			if self.focused && row_index == cursor_row {
				let col = cursor_col.min(width) as u16;
				let cursor_x = if col < row_width {
					start_x + col
				} else if is_rtl {
					start_x.saturating_sub(1).max(area.x)
				} else {
					(start_x + col).min(area.right() - 1)
				};
				let symbol = row.get(col as usize).copied().unwrap_or(" ");
				buf.set_string(cursor_x, y, symbol, self.cursor_style);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use motarjem_tui_testing::{event_sequence_strategy, TestHarness};
	use proptest::prelude::*;

	fn typed(text: &str) -> InputBoxState {
		let mut state = InputBoxState::new();
		for c in text.chars() {
			state.insert_char(c);
		}
		state
	}

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn test_insert_and_cursor() {
		let state = typed("hi");
		assert_eq!(state.content(), "hi");
		assert_eq!(state.cursor_position(), 2);
	}

	#[test]
	fn test_delete_char_removes_whole_grapheme() {
		let mut state = typed("لطفاً");
		state.delete_char();
		assert_eq!(state.content(), "لطف");
	}

	#[test]
	fn test_cursor_movement() {
		let mut state = typed("abc");
		state.move_cursor_start();
		assert_eq!(state.cursor_position(), 0);
		state.move_cursor_end();
		assert_eq!(state.cursor_position(), 3);
		state.move_cursor_left();
		assert_eq!(state.cursor_position(), 2);
		state.move_cursor_right();
		assert_eq!(state.cursor_position(), 3);
	}

	#[test]
	fn test_set_content_moves_cursor_to_end() {
		let mut state = typed("old");
		state.set_content("سلام");
		assert_eq!(state.content(), "سلام");
		assert_eq!(state.cursor_position(), "سلام".len());
	}

	#[test]
	fn test_insert_str_normalizes_line_endings() {
		let mut state = InputBoxState::new();
		state.insert_str("a\r\nb");
		assert_eq!(state.content(), "a\nb");
		assert_eq!(state.cursor_position(), 3);
	}

	#[test]
	fn test_word_navigation() {
		let mut state = typed("hello world test");
		state.move_cursor_start();
		state.move_cursor_next_word();
		assert_eq!(state.cursor_position(), 6);
		state.move_cursor_next_word();
		assert_eq!(state.cursor_position(), 12);
		state.move_cursor_prev_word();
		assert_eq!(state.cursor_position(), 6);
		state.move_cursor_prev_word();
		assert_eq!(state.cursor_position(), 0);
	}

	#[test]
	fn test_delete_prev_word() {
		let mut state = typed("hello world");
		state.delete_prev_word();
		assert_eq!(state.content(), "hello ");
	}

	#[test]
	fn test_arrows_mirror_under_rtl() {
		let mut state = typed("ab");
		state.move_cursor_start();
		assert!(state.handle_key(&key(KeyCode::Left), TextDirection::Rtl));
		assert_eq!(state.cursor_position(), 1);
		assert!(state.handle_key(&key(KeyCode::Right), TextDirection::Rtl));
		assert_eq!(state.cursor_position(), 0);
		assert!(!state.handle_key(&key(KeyCode::Left), TextDirection::Ltr));
	}

	#[test]
	fn test_alt_enter_inserts_newline() {
		let mut state = typed("a");
		let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
		assert!(state.handle_key(&alt_enter, TextDirection::Ltr));
		assert_eq!(state.content(), "a\n");
		assert!(!state.handle_key(&key(KeyCode::Enter), TextDirection::Ltr));
	}

	#[test]
	fn test_control_chars_are_not_inserted() {
		let mut state = InputBoxState::new();
		let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
		assert!(!state.handle_key(&ctrl_t, TextDirection::Ltr));
		assert!(state.is_empty());
	}

	#[test]
	fn test_wrap_breaks_rows_and_tracks_cursor() {
		let wrapped = wrap("abcdef\ngh", 9, 4);
		assert_eq!(wrapped.rows, vec![vec!["a", "b", "c", "d"], vec!["e", "f"], vec!["g", "h"]]);
		assert_eq!(wrapped.cursor, (2, 2));

		let wrapped = wrap("abcd", 4, 4);
		assert_eq!(wrapped.cursor, (1, 0));
	}

	#[test]
	fn test_render_placeholder_rtl() {
		let mut harness = TestHarness::new(12, 2);
		let mut state = InputBoxState::new();
		harness.render(|frame, area, _| {
			let input = InputBox::new().placeholder("متن").direction(TextDirection::Rtl);
			frame.render_stateful_widget(input, area, &mut state);
		});
		assert_eq!(harness.find_text("متن"), Some((0, 9)));
	}

	#[test]
	fn test_focused_empty_box_keeps_placeholder_intact() {
		for direction in [TextDirection::Ltr, TextDirection::Rtl] {
			let mut harness = TestHarness::new(20, 1);
			let mut state = InputBoxState::new();
			harness.render(|frame, area, _| {
				let input = InputBox::new()
					.placeholder("Enter text…")
					.focused(true)
					.direction(direction);
				frame.render_stateful_widget(input, area, &mut state);
			});
			assert!(harness.contains("Enter text…"), "{direction:?}: {:?}", harness.buffer_lines());
		}

		let mut harness = TestHarness::new(20, 1);
		let mut state = InputBoxState::new();
		harness.render(|frame, area, _| {
			frame.render_stateful_widget(InputBox::new().focused(true), area, &mut state);
		});
		assert_eq!(harness.buffer_lines()[0], " ".repeat(20));
	}

	#[test]
	fn test_render_wraps_and_scrolls_to_cursor() {
		let mut harness = TestHarness::new(4, 2);
		let mut state = typed("abcdefghij");
		harness.render(|frame, area, _| {
			let input = InputBox::new().focused(true);
			frame.render_stateful_widget(input, area, &mut state);
		});
		assert_eq!(state.scroll_offset(), 1);
		let lines = harness.buffer_lines();
		assert_eq!(lines[0], "efgh");
		assert_eq!(lines[1], "ij  ");
	}

	proptest! {
		#[test]
		fn cursor_stays_on_char_boundary(events in event_sequence_strategy(40)) {
			let mut state = InputBoxState::new();
			for event in events {
				if let crossterm::event::Event::Key(key) = event {
					state.handle_key(&key, TextDirection::Rtl);
				}
				prop_assert!(state.cursor_position() <= state.content().len());
				prop_assert!(state.content().is_char_boundary(state.cursor_position()));
			}
		}
	}
}
