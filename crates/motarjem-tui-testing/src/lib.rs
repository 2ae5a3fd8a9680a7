// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rendering harness over [`TestBackend`] for widget and screen tests.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, style::Style, Frame, Terminal};

pub use motarjem_tui_theme::Theme;

pub trait InteractiveComponent {
	fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme);
	fn handle_event(&mut self, event: Event);
}

pub struct TestHarness {
	terminal: Terminal<TestBackend>,
	theme: Theme,
}

impl TestHarness {
	pub fn new(width: u16, height: u16) -> Self {
		let backend = TestBackend::new(width, height);
		let terminal = Terminal::new(backend).expect("failed to create terminal");
		Self {
			terminal,
			theme: Theme::default(),
		}
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	pub fn render<F>(&mut self, render_fn: F) -> &TestBackend
	where
		F: FnOnce(&mut Frame, Rect, &Theme),
	{
		let theme = &self.theme;
		self.terminal
			.draw(|frame| {
				let area = frame.area();
				render_fn(frame, area, theme);
			})
			.expect("failed to draw");
		self.terminal.backend()
	}

	pub fn buffer(&self) -> &Buffer {
		self.terminal.backend().buffer()
	}

	pub fn buffer_lines(&self) -> Vec<String> {
		buffer_lines(self.buffer())
	}

	/// Row and cell column of the first occurrence of `needle`.
	pub fn find_text(&self, needle: &str) -> Option<(usize, usize)> {
		find_text(self.buffer(), needle)
	}

	pub fn contains(&self, needle: &str) -> bool {
		self.find_text(needle).is_some()
	}

	/// Style of the cell at `(x, y)`.
	pub fn style_at(&self, x: u16, y: u16) -> Style {
		self.buffer()[(x, y)].style()
	}
}

pub struct ComponentHarness<C> {
	pub harness: TestHarness,
	pub component: C,
}

impl<C: InteractiveComponent> ComponentHarness<C> {
	pub fn new(component: C, width: u16, height: u16) -> Self {
		Self {
			harness: TestHarness::new(width, height),
			component,
		}
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.harness = self.harness.with_theme(theme);
		self
	}

	pub fn render(&mut self) -> &TestBackend {
		let component = &self.component;
		self.harness.render(|frame, area, theme| {
			component.render(frame, area, theme);
		})
	}

	pub fn send_event(&mut self, event: Event) -> &TestBackend {
		self.component.handle_event(event);
		self.render()
	}

	pub fn send_key(&mut self, key: KeyEvent) -> &TestBackend {
		self.send_event(Event::Key(key))
	}

	pub fn send_ctrl(&mut self, ch: char) -> &TestBackend {
		self.send_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
	}

	pub fn assert_state_sequence<T, F>(
		&mut self,
		events: &[Event],
		mut extract_state: F,
		expected: &[T],
	) where
		T: PartialEq + std::fmt::Debug + Clone,
		F: FnMut(&C) -> T,
	{
		assert_eq!(
			events.len(),
			expected.len(),
			"events and expected states must have the same length"
		);

		for (i, (event, expected_state)) in events.iter().zip(expected.iter()).enumerate() {
			self.component.handle_event(event.clone());
			let actual_state = extract_state(&self.component);
			assert_eq!(
				&actual_state, expected_state,
				"state mismatch at step {}: expected {:?}, got {:?}",
				i, expected_state, actual_state
			);
		}
	}

	pub fn user_press_enter(&mut self) -> &TestBackend {
		self.send_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
	}

	pub fn user_press(&mut self, code: KeyCode) -> &TestBackend {
		self.send_key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	pub fn user_type(&mut self, text: &str) -> &TestBackend {
		for ch in text.chars() {
			self.component
				.handle_event(Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)));
		}
		self.render()
	}

	pub fn buffer_lines(&self) -> Vec<String> {
		self.harness.buffer_lines()
	}

	pub fn find_text(&self, needle: &str) -> Option<(usize, usize)> {
		self.harness.find_text(needle)
	}

	pub fn contains(&self, needle: &str) -> bool {
		self.harness.contains(needle)
	}
}

/// Buffer rows as strings, one cell symbol after another.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
	let area = buffer.area;
	let mut lines = Vec::new();

	for y in area.y..area.y + area.height {
		let mut line = String::new();
		for x in area.x..area.x + area.width {
			let cell = &buffer[(x, y)];
			line.push_str(cell.symbol());
		}
		lines.push(line);
	}

	lines
}

/// Row and cell column of `needle` in a rendered buffer.
///
/// The column counts cells, not bytes, so it can be compared with widget
/// coordinates even when the row holds multi-byte text.
pub fn find_text(buffer: &Buffer, needle: &str) -> Option<(usize, usize)> {
	let area = buffer.area;
	for y in area.y..area.y + area.height {
		let mut line = String::new();
		let mut cell_starts = Vec::new();
		for x in area.x..area.x + area.width {
			cell_starts.push(line.len());
			line.push_str(buffer[(x, y)].symbol());
		}
		if let Some(byte) = line.find(needle) {
			let col = cell_starts.iter().rposition(|&start| start <= byte).unwrap_or(0);
			return Some(((y - area.y) as usize, col));
		}
	}
	None
}

#[cfg(feature = "proptest")]
pub mod strategies {
	use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
	use proptest::prelude::*;

	pub fn key_event_strategy() -> impl Strategy<Value = KeyEvent> {
		let key_code = prop_oneof![
			Just(KeyCode::Enter),
			Just(KeyCode::Esc),
			Just(KeyCode::Backspace),
			Just(KeyCode::Tab),
			Just(KeyCode::BackTab),
			Just(KeyCode::Left),
			Just(KeyCode::Right),
			Just(KeyCode::Home),
			Just(KeyCode::End),
			Just(KeyCode::Delete),
			proptest::char::range('a', 'z').prop_map(KeyCode::Char),
			proptest::char::range('آ', 'ی').prop_map(KeyCode::Char),
			proptest::char::range('0', '9').prop_map(KeyCode::Char),
			proptest::sample::select(vec![' ', '!', '?', '،', '.']).prop_map(KeyCode::Char),
		];

		let modifiers = prop_oneof![
			Just(KeyModifiers::NONE),
			Just(KeyModifiers::SHIFT),
			Just(KeyModifiers::CONTROL),
			Just(KeyModifiers::ALT),
		];

		(key_code, modifiers).prop_map(|(code, mods)| KeyEvent::new(code, mods))
	}

	pub fn event_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<Event>> {
		proptest::collection::vec(key_event_strategy().prop_map(Event::Key), 0..=max_len)
	}
}

#[cfg(feature = "proptest")]
pub use strategies::{event_sequence_strategy, key_event_strategy};
