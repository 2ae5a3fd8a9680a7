// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crossterm::event::KeyEvent;

pub use motarjem_common_i18n::{available_locales, is_rtl, resolve_locale, t, t_fmt, Direction, LocaleInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
	#[default]
	Ltr,
	Rtl,
}

impl From<motarjem_common_i18n::Direction> for TextDirection {
	fn from(dir: motarjem_common_i18n::Direction) -> Self {
		match dir {
			motarjem_common_i18n::Direction::Ltr => TextDirection::Ltr,
			motarjem_common_i18n::Direction::Rtl => TextDirection::Rtl,
		}
	}
}

impl TextDirection {
	pub fn from_locale(locale: &str) -> Self {
		if motarjem_common_i18n::is_rtl(locale) {
			TextDirection::Rtl
		} else {
			TextDirection::Ltr
		}
	}

	pub fn is_rtl(&self) -> bool {
		matches!(self, TextDirection::Rtl)
	}

	pub fn is_ltr(&self) -> bool {
		matches!(self, TextDirection::Ltr)
	}

	/// Mirror a horizontal position for RTL
	pub fn mirror_x(&self, x: u16, width: u16) -> u16 {
		match self {
			TextDirection::Ltr => x,
			TextDirection::Rtl => width.saturating_sub(x + 1),
		}
	}

	/// Get alignment start position
	pub fn align_start(&self, area_width: u16, content_width: u16) -> u16 {
		match self {
			TextDirection::Ltr => 0,
			TextDirection::Rtl => area_width.saturating_sub(content_width),
		}
	}

	/// Get alignment end position
	pub fn align_end(&self, area_width: u16, content_width: u16) -> u16 {
		match self {
			TextDirection::Ltr => area_width.saturating_sub(content_width),
			TextDirection::Rtl => 0,
		}
	}

	/// Logical offset for an on-screen step: under RTL, items run right to
	/// left, so pressing Left moves forward.
	pub fn logical_step(&self, step: HorizontalStep) -> isize {
		match (self, step) {
			(TextDirection::Ltr, HorizontalStep::Left) | (TextDirection::Rtl, HorizontalStep::Right) => -1,
			(TextDirection::Ltr, HorizontalStep::Right) | (TextDirection::Rtl, HorizontalStep::Left) => 1,
		}
	}
}

#[derive(Debug, Clone)]
pub struct LocaleContext {
	pub locale: String,
	pub direction: TextDirection,
}

impl Default for LocaleContext {
	fn default() -> Self {
		Self {
			locale: "en".to_string(),
			direction: TextDirection::Ltr,
		}
	}
}

impl LocaleContext {
	pub fn new(locale: impl Into<String>) -> Self {
		let locale = locale.into();
		let direction = TextDirection::from_locale(&locale);
		Self { locale, direction }
	}

	/// A context whose layout direction does not follow the locale.
	pub fn with_direction(locale: impl Into<String>, direction: TextDirection) -> Self {
		Self {
			locale: locale.into(),
			direction,
		}
	}

	pub fn is_rtl(&self) -> bool {
		self.direction.is_rtl()
	}

	/// Translate a key using this context's locale
	pub fn t(&self, key: &str) -> String {
		motarjem_common_i18n::t(&self.locale, key)
	}

	/// Translate a key with format variables
	pub fn t_fmt(&self, key: &str, vars: &[(&str, &str)]) -> String {
		motarjem_common_i18n::t_fmt(&self.locale, key, vars)
	}
}

/// A visual left/right step, resolved with [`TextDirection::logical_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalStep {
	Left,
	Right,
}

/// Type alias for focus identifiers.
pub type FocusId = String;

/// Screen commands produced by a [`Keymap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	/// Request application shutdown.
	Quit,
	/// Move focus to the next focusable area.
	FocusNext,
	/// Move focus to the previous focusable area.
	FocusPrev,
	/// Translate the current input.
	Submit,
	/// Step through the choices of the focused chip bar.
	Choose(HorizontalStep),
	ToggleTheme,
	CopyResult,
	Clear,
	Swap,
	CycleLocale,
}

/// Tracks which area currently has focus.
#[derive(Debug, Default, Clone)]
pub struct FocusState {
	pub focused_id: Option<FocusId>,
	pub focusable_ids: Vec<FocusId>,
}

impl FocusState {
	/// Register a new focusable area.
	pub fn register(&mut self, id: impl Into<FocusId>) {
		let id = id.into();
		if !self.focusable_ids.contains(&id) {
			self.focusable_ids.push(id);
		}
	}

	/// Unregister a focusable area.
	pub fn unregister(&mut self, id: &str) {
		self.focusable_ids.retain(|i| i != id);
		if self.focused_id.as_deref() == Some(id) {
			self.focused_id = None;
		}
	}

	/// Move focus to the next area.
	pub fn focus_next(&mut self) {
		if self.focusable_ids.is_empty() {
			return;
		}
		let next_idx = match self.focused_index() {
			Some(idx) => (idx + 1) % self.focusable_ids.len(),
			None => 0,
		};
		self.focused_id = Some(self.focusable_ids[next_idx].clone());
	}

	/// Move focus to the previous area.
	pub fn focus_prev(&mut self) {
		if self.focusable_ids.is_empty() {
			return;
		}
		let prev_idx = match self.focused_index() {
			Some(0) | None => self.focusable_ids.len() - 1,
			Some(idx) => idx - 1,
		};
		self.focused_id = Some(self.focusable_ids[prev_idx].clone());
	}

	/// Set focus to a specific area by id.
	pub fn set_focus(&mut self, id: &str) {
		if self.focusable_ids.iter().any(|i| i == id) {
			self.focused_id = Some(id.to_string());
		}
	}

	/// Check if an area has focus.
	pub fn is_focused(&self, id: &str) -> bool {
		self.focused_id.as_deref() == Some(id)
	}

	fn focused_index(&self) -> Option<usize> {
		self.focused_id
			.as_ref()
			.and_then(|id| self.focusable_ids.iter().position(|i| i == id))
	}
}

/// Trait for mapping key events to actions based on focus state.
pub trait Keymap<A> {
	fn key_to_action(&self, key: &KeyEvent, focus: &FocusState) -> Option<A>;
}
