// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use motarjem_tui_core::TextDirection;
use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::Style,
	text::{Line, Span},
	widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// Screen header: title and subtitle at the reading start, a status
/// indicator at the reading end.
///
/// The subtitle takes the second row when there is one, otherwise it is
/// dropped.
#[derive(Debug, Clone)]
pub struct Header {
	title: String,
	subtitle: Option<String>,
	icon: Option<String>,
	status: Option<String>,
	style: Style,
	subtitle_style: Style,
	status_style: Style,
	direction: TextDirection,
}

impl Header {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			subtitle: None,
			icon: None,
			status: None,
			style: Style::default(),
			subtitle_style: Style::default(),
			status_style: Style::default(),
			direction: TextDirection::Ltr,
		}
	}

	pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
		self.subtitle = Some(subtitle.into());
		self
	}

	pub fn icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	pub fn status(mut self, status: impl Into<String>) -> Self {
		self.status = Some(status.into());
		self
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	pub fn subtitle_style(mut self, style: Style) -> Self {
		self.subtitle_style = style;
		self
	}

	pub fn status_style(mut self, style: Style) -> Self {
		self.status_style = style;
		self
	}

	pub fn direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}

	fn heading(&self) -> String {
		match (&self.icon, self.direction) {
			(Some(icon), TextDirection::Ltr) => format!("{icon} {}", self.title),
			(Some(icon), TextDirection::Rtl) => format!("{} {icon}", self.title),
			(None, _) => self.title.clone(),
		}
	}
}

/// Writes `text` into one row of `region`, hugging its start or end edge.
fn put(buf: &mut Buffer, region: Rect, row: u16, text: &str, style: Style, at_reading_start: bool, direction: TextDirection) {
	let width = (UnicodeWidthStr::width(text) as u16).min(region.width);
	let x = if at_reading_start == direction.is_ltr() {
		region.x
	} else {
		region.x + region.width - width
	};
	let line = Line::from(Span::styled(text, style));
	buf.set_line(x, region.y + row, &line, width);
}

impl Widget for Header {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.height == 0 || area.width == 0 {
			return;
		}

		buf.set_style(area, self.style);

		let direction = self.direction;
		let status_width = self
			.status
			.as_ref()
			.map(|s| UnicodeWidthStr::width(s.as_str()) as u16)
			.unwrap_or(0);
		let heading_max = if status_width > 0 {
			area.width.saturating_sub(status_width + 1)
		} else {
			area.width
		};

		if let Some(ref status) = self.status {
			put(buf, area, 0, status, self.status_style, false, direction);
		}

		let heading_region = Rect {
			x: if direction.is_ltr() {
				area.x
			} else {
				area.x + area.width - heading_max
			},
			width: heading_max,
			..area
		};
		put(buf, heading_region, 0, &self.heading(), self.style, true, direction);

		if area.height >= 2 {
			if let Some(ref subtitle) = self.subtitle {
				put(buf, area, 1, subtitle, self.subtitle_style, true, direction);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use motarjem_tui_testing::TestHarness;

	#[test]
	fn test_header_new() {
		let header = Header::new("Test Title");
		assert_eq!(header.title, "Test Title");
		assert!(header.subtitle.is_none());
		assert!(header.icon.is_none());
		assert!(header.status.is_none());
		assert_eq!(header.direction, TextDirection::Ltr);
	}

	#[test]
	fn test_header_full_builder() {
		let header = Header::new("Title").icon("*").subtitle("Details").status("Ready");

		assert_eq!(header.title, "Title");
		assert_eq!(header.icon, Some("*".to_string()));
		assert_eq!(header.subtitle, Some("Details".to_string()));
		assert_eq!(header.status, Some("Ready".to_string()));
	}

	#[test]
	fn test_ltr_layout() {
		let mut harness = TestHarness::new(30, 2);
		harness.render(|frame, area, _| {
			let header = Header::new("Motarjem").subtitle("Any to Persian").status("[dark]");
			frame.render_widget(header, area);
		});
		assert_eq!(harness.find_text("Motarjem"), Some((0, 0)));
		assert_eq!(harness.find_text("[dark]"), Some((0, 24)));
		assert_eq!(harness.find_text("Any to Persian"), Some((1, 0)));
	}

	#[test]
	fn test_rtl_layout_mirrors() {
		let mut harness = TestHarness::new(30, 2);
		harness.render(|frame, area, _| {
			let header = Header::new("مترجم")
				.subtitle("خروجی فارسی")
				.status("[dark]")
				.direction(TextDirection::Rtl);
			frame.render_widget(header, area);
		});
		assert_eq!(harness.find_text("[dark]"), Some((0, 0)));
		assert_eq!(harness.find_text("مترجم"), Some((0, 25)));
		assert_eq!(harness.find_text("خروجی فارسی"), Some((1, 19)));
	}

	#[test]
	fn test_single_row_drops_subtitle() {
		let mut harness = TestHarness::new(20, 1);
		harness.render(|frame, area, _| {
			frame.render_widget(Header::new("Title").subtitle("Hidden"), area);
		});
		assert!(harness.find_text("Hidden").is_none());
		assert!(harness.find_text("Title").is_some());
	}

	#[test]
	fn test_icon_precedes_title_at_reading_start() {
		let header = Header::new("Title").icon("*");
		assert_eq!(header.heading(), "* Title");
		let header = Header::new("Title").icon("*").direction(TextDirection::Rtl);
		assert_eq!(header.heading(), "Title *");
	}
}
