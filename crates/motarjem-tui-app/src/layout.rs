// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
	pub header: Rect,
	pub source: Rect,
	/// Only present in two-way mode.
	pub target: Option<Rect>,
	pub input: Rect,
	pub action: Rect,
	pub output: Rect,
	pub footer: Rect,
	pub status: Rect,
}

pub fn create_screen_layout(area: Rect, two_way: bool) -> ScreenLayout {
	let header_height = if area.height >= 20 { 2 } else { 1 };
	// Bordered chip bar; the hint row is dropped on short terminals.
	let bar_height = if area.height >= 24 { 4 } else { 3 };

	let mut constraints = vec![Constraint::Length(header_height), Constraint::Length(bar_height)];
	if two_way {
		constraints.push(Constraint::Length(bar_height));
	}
	constraints.extend([
		Constraint::Min(3),
		Constraint::Length(1),
		Constraint::Min(3),
		Constraint::Length(1),
		Constraint::Length(1),
	]);

	let areas = Layout::default()
		.direction(Direction::Vertical)
		.constraints(constraints)
		.split(area);

	let (target, rest) = if two_way {
		(Some(areas[2]), &areas[3..])
	} else {
		(None, &areas[2..])
	};

	ScreenLayout {
		header: areas[0],
		source: areas[1],
		target,
		input: rest[0],
		action: rest[1],
		output: rest[2],
		footer: rest[3],
		status: rest[4],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixed_mode_has_no_target_bar() {
		let layout = create_screen_layout(Rect::new(0, 0, 80, 30), false);
		assert!(layout.target.is_none());
		assert_eq!(layout.header.height, 2);
		assert_eq!(layout.source.height, 4);
		assert_eq!(layout.status.y, 29);
		assert_eq!(layout.footer.y, 28);
	}

	#[test]
	fn test_two_way_stacks_target_below_source() {
		let layout = create_screen_layout(Rect::new(0, 0, 80, 30), true);
		let target = layout.target.expect("target bar");
		assert_eq!(target.y, layout.source.bottom());
		assert_eq!(layout.input.y, target.bottom());
	}

	#[test]
	fn test_short_terminal_compacts_header_and_bars() {
		let layout = create_screen_layout(Rect::new(0, 0, 60, 18), false);
		assert_eq!(layout.header.height, 1);
		assert_eq!(layout.source.height, 3);
		assert!(layout.input.height >= 3);
		assert!(layout.output.height >= 3);
	}
}
