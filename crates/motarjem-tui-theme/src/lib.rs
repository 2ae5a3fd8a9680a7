// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use motarjem_tui_core::TextDirection;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
	pub background: Color,
	pub surface: Color,
	pub border: Color,
	pub text: Color,
	pub text_muted: Color,
	pub text_placeholder: Color,
	pub text_disabled: Color,
	pub text_inverted: Color,
	pub accent: Color,
	pub primary: Color,
	pub chip: Color,
	pub chip_active: Color,
	pub chip_active_text: Color,
	pub error: Color,
	pub success: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BorderStyles {
	pub normal: Style,
	pub focused: Style,
	pub error: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyles {
	pub normal: Style,
	pub bold: Style,
	pub dim: Style,
	pub title: Style,
	pub placeholder: Style,
	pub disabled: Style,
	pub error: Style,
	pub success: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spacing {
	pub padding: u16,
	pub padding_dense: u16,
	pub gutter: u16,
	pub margin: u16,
}

impl Spacing {
	pub fn new() -> Self {
		Self {
			padding: 1,
			padding_dense: 0,
			gutter: 1,
			margin: 1,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
	pub name: String,
	pub colors: ColorPalette,
	pub borders: BorderStyles,
	pub text: TextStyles,
	pub spacing: Spacing,
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}

impl Theme {
	/// Indigo on a near-white page.
	pub fn light() -> Self {
		Self::from_palette(
			"light",
			ColorPalette {
				background: Color::Rgb(0xf6, 0xf7, 0xfb),
				surface: Color::Rgb(0xff, 0xff, 0xff),
				border: Color::Rgb(0xdf, 0xe1, 0xe7),
				text: Color::Rgb(0x0f, 0x17, 0x2a),
				text_muted: Color::Rgb(0x47, 0x55, 0x69),
				text_placeholder: Color::Rgb(154, 161, 172),
				text_disabled: Color::Rgb(181, 187, 195),
				text_inverted: Color::Rgb(0xff, 0xff, 0xff),
				accent: Color::Rgb(0x4f, 0x46, 0xe5),
				primary: Color::Rgb(0x4f, 0x46, 0xe5),
				chip: Color::Rgb(241, 240, 253),
				chip_active: Color::Rgb(223, 221, 250),
				chip_active_text: Color::Rgb(0x4f, 0x46, 0xe5),
				error: Color::Rgb(0xdc, 0x26, 0x26),
				success: Color::Rgb(0x16, 0xa3, 0x4a),
			},
		)
	}

	/// Soft violet on a near-black page.
	pub fn dark() -> Self {
		Self::from_palette(
			"dark",
			ColorPalette {
				background: Color::Rgb(0x07, 0x0a, 0x12),
				surface: Color::Rgb(16, 19, 26),
				border: Color::Rgb(27, 29, 37),
				text: Color::Rgb(0xe5, 0xe7, 0xeb),
				text_muted: Color::Rgb(151, 154, 159),
				text_placeholder: Color::Rgb(85, 87, 94),
				text_disabled: Color::Rgb(85, 87, 94),
				text_inverted: Color::Rgb(0xff, 0xff, 0xff),
				accent: Color::Rgb(0x8b, 0x85, 0xff),
				primary: Color::Rgb(0x6d, 0x67, 0xff),
				chip: Color::Rgb(19, 21, 46),
				chip_active: Color::Rgb(29, 30, 70),
				chip_active_text: Color::Rgb(0xc7, 0xc4, 0xff),
				error: Color::Rgb(0xf8, 0x71, 0x71),
				success: Color::Rgb(0x4a, 0xde, 0x80),
			},
		)
	}

	fn from_palette(name: &str, colors: ColorPalette) -> Self {
		let borders = BorderStyles {
			normal: Style::default().fg(colors.border),
			focused: Style::default().fg(colors.accent),
			error: Style::default().fg(colors.error),
		};

		let text = TextStyles {
			normal: Style::default().fg(colors.text),
			bold: Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
			dim: Style::default().fg(colors.text_muted),
			title: Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
			placeholder: Style::default().fg(colors.text_placeholder),
			disabled: Style::default().fg(colors.text_disabled),
			error: Style::default().fg(colors.error),
			success: Style::default().fg(colors.success),
		};

		Self {
			name: name.to_string(),
			colors,
			borders,
			text,
			spacing: Spacing::new(),
		}
	}

	pub fn is_dark(&self) -> bool {
		self.name == "dark"
	}

	pub fn page(&self) -> Style {
		Style::default().bg(self.colors.background).fg(self.colors.text)
	}

	pub fn panel(&self) -> Style {
		Style::default().bg(self.colors.surface).fg(self.colors.text)
	}

	pub fn border_normal(&self) -> Style {
		self.borders.normal
	}

	pub fn border_focused(&self) -> Style {
		self.borders.focused
	}

	pub fn chip(&self) -> Style {
		Style::default().bg(self.colors.chip).fg(self.colors.text)
	}

	pub fn chip_active(&self) -> Style {
		Style::default()
			.bg(self.colors.chip_active)
			.fg(self.colors.chip_active_text)
			.add_modifier(Modifier::BOLD)
	}

	pub fn primary_button(&self) -> Style {
		Style::default()
			.bg(self.colors.primary)
			.fg(self.colors.text_inverted)
			.add_modifier(Modifier::BOLD)
	}

	pub fn primary_button_busy(&self) -> Style {
		Style::default().bg(self.colors.primary).fg(self.colors.text_inverted)
	}

	pub fn input_text(&self) -> Style {
		self.text.normal
	}

	pub fn input_placeholder(&self) -> Style {
		self.text.placeholder
	}

	pub fn input_disabled(&self) -> Style {
		self.text.disabled
	}

	pub fn error_text(&self) -> Style {
		self.text.error
	}

	pub fn success_text(&self) -> Style {
		self.text.success
	}

	pub fn border_style_for(&self, focused: bool) -> Style {
		if focused {
			self.borders.focused
		} else {
			self.borders.normal
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDirection {
	pub direction: TextDirection,
}

impl Default for LayoutDirection {
	fn default() -> Self {
		Self {
			direction: TextDirection::Ltr,
		}
	}
}

impl LayoutDirection {
	pub fn new(direction: TextDirection) -> Self {
		Self { direction }
	}

	pub fn from_locale(locale: &str) -> Self {
		Self {
			direction: TextDirection::from_locale(locale),
		}
	}

	pub fn is_rtl(&self) -> bool {
		self.direction.is_rtl()
	}

	pub fn start_x(&self, area_x: u16, area_width: u16, content_width: u16) -> u16 {
		if self.is_rtl() {
			area_x + area_width.saturating_sub(content_width)
		} else {
			area_x
		}
	}

	pub fn end_x(&self, area_x: u16, area_width: u16, content_width: u16) -> u16 {
		if self.is_rtl() {
			area_x
		} else {
			area_x + area_width.saturating_sub(content_width)
		}
	}

	/// Split `area` into a `start_width` column at the reading start and the rest.
	pub fn split_horizontal(
		&self,
		area: ratatui::layout::Rect,
		start_width: u16,
	) -> (ratatui::layout::Rect, ratatui::layout::Rect) {
		use ratatui::layout::Rect;

		let start_width = start_width.min(area.width);
		let end_width = area.width - start_width;

		if self.is_rtl() {
			let end_area = Rect::new(area.x, area.y, end_width, area.height);
			let start_area = Rect::new(area.x + end_width, area.y, start_width, area.height);
			(start_area, end_area)
		} else {
			let start_area = Rect::new(area.x, area.y, start_width, area.height);
			let end_area = Rect::new(area.x + start_width, area.y, end_width, area.height);
			(start_area, end_area)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ratatui::layout::Rect;

	#[test]
	fn light_and_dark_differ() {
		let light = Theme::light();
		let dark = Theme::dark();
		assert_ne!(light.colors.background, dark.colors.background);
		assert!(dark.is_dark());
		assert!(!light.is_dark());
	}

	#[test]
	fn light_accent_is_indigo() {
		assert_eq!(Theme::light().colors.accent, Color::Rgb(0x4f, 0x46, 0xe5));
	}

	#[test]
	fn focused_border_uses_accent() {
		let theme = Theme::dark();
		assert_eq!(theme.border_style_for(true).fg, Some(theme.colors.accent));
		assert_eq!(theme.border_style_for(false), theme.borders.normal);
	}

	#[test]
	fn split_puts_start_on_the_right_under_rtl() {
		let area = Rect::new(2, 0, 20, 1);
		let (start, end) = LayoutDirection::new(TextDirection::Rtl).split_horizontal(area, 5);
		assert_eq!(start, Rect::new(17, 0, 5, 1));
		assert_eq!(end, Rect::new(2, 0, 15, 1));

		let (start, end) = LayoutDirection::new(TextDirection::Ltr).split_horizontal(area, 5);
		assert_eq!(start, Rect::new(2, 0, 5, 1));
		assert_eq!(end, Rect::new(7, 0, 15, 1));
	}

	#[test]
	fn split_clamps_oversized_start() {
		let area = Rect::new(0, 0, 4, 1);
		let (start, end) = LayoutDirection::default().split_horizontal(area, 10);
		assert_eq!(start.width, 4);
		assert_eq!(end.width, 0);
	}

	#[test]
	fn start_x_aligns_to_reading_start() {
		let rtl = LayoutDirection::from_locale("fa");
		assert_eq!(rtl.start_x(0, 30, 10), 20);
		assert_eq!(rtl.end_x(0, 30, 10), 0);
		let ltr = LayoutDirection::from_locale("en");
		assert_eq!(ltr.start_x(0, 30, 10), 0);
	}
}
