// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use motarjem_tui_core::{Action, FocusState, HorizontalStep, Keymap};

pub const FOCUS_SOURCE: &str = "source";
pub const FOCUS_TARGET: &str = "target";
pub const FOCUS_INPUT: &str = "input";
pub const FOCUS_OUTPUT: &str = "output";

/// Global bindings plus chip navigation when a language bar has focus.
///
/// Keys that map to nothing fall through to the focused widget.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScreenKeymap;

impl Keymap<Action> for ScreenKeymap {
	fn key_to_action(&self, key: &KeyEvent, focus: &FocusState) -> Option<Action> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

		if ctrl {
			return match key.code {
				KeyCode::Char('c') => Some(Action::Quit),
				KeyCode::Char('t') => Some(Action::ToggleTheme),
				KeyCode::Char('y') => Some(Action::CopyResult),
				KeyCode::Char('k') => Some(Action::Clear),
				KeyCode::Char('s') => Some(Action::Swap),
				KeyCode::Char('l') => Some(Action::CycleLocale),
				_ => None,
			};
		}

		match key.code {
			KeyCode::Esc => Some(Action::Quit),
			KeyCode::Tab => Some(Action::FocusNext),
			KeyCode::BackTab => Some(Action::FocusPrev),
			// Alt+Enter is a newline in the input box.
			KeyCode::Enter if !key.modifiers.contains(KeyModifiers::ALT) => Some(Action::Submit),
			KeyCode::Left if on_language_bar(focus) => Some(Action::Choose(HorizontalStep::Left)),
			KeyCode::Right if on_language_bar(focus) => Some(Action::Choose(HorizontalStep::Right)),
			_ => None,
		}
	}
}

fn on_language_bar(focus: &FocusState) -> bool {
	focus.is_focused(FOCUS_SOURCE) || focus.is_focused(FOCUS_TARGET)
}
