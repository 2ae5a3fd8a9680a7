// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{
	layout::{Alignment, Rect},
	style::Style,
	text::{Line, Span},
	widgets::{Block, Borders, Paragraph, Wrap},
	Frame,
};
use tracing::{debug, error, info, warn};

use motarjem_translate::Language;
use motarjem_tui_core::{Action, FocusState, HorizontalStep, Keymap, LocaleContext, TextDirection};
use motarjem_tui_theme::Theme;
use motarjem_tui_widget_header::Header;
use motarjem_tui_widget_input_box::{InputBox, InputBoxState};
use motarjem_tui_widget_language_bar::{LanguageBar, LanguageBarState};
use motarjem_tui_widget_spinner::{Spinner, SpinnerState};
use motarjem_tui_widget_status_bar::StatusBar;
use motarjem_workflow::{
	Clipboard, Outcome, PendingRequest, Reply, ScreenMode, Session, Submission, ThemeMode, Ticket,
	WorkflowError,
};

use crate::keymap::{ScreenKeymap, FOCUS_INPUT, FOCUS_OUTPUT, FOCUS_SOURCE, FOCUS_TARGET};
use crate::layout::create_screen_layout;

/// UI locales reachable with Ctrl+L, in cycle order.
const UI_LOCALES: [&str; 3] = ["fa", "en", "ar"];

/// Work the screen asks the runner to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
	Spawn(PendingRequest),
	Abort(Ticket),
}

/// A one-shot status bar message; cleared by the next key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notice {
	Copied,
	NothingToCopy,
	CopyFailed,
	SwapUnavailable,
}

impl Notice {
	fn message_key(self) -> &'static str {
		match self {
			Notice::Copied => "client.status.copied",
			Notice::NothingToCopy => "client.status.nothing_to_copy",
			Notice::CopyFailed => "client.status.copy_failed",
			Notice::SwapUnavailable => "client.status.swap_unavailable",
		}
	}

	fn is_error(self) -> bool {
		matches!(self, Notice::CopyFailed | Notice::SwapUnavailable)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BarRole {
	Source,
	Target,
}

pub struct App {
	session: Session,
	input: InputBoxState,
	source_bar: LanguageBarState,
	target_bar: LanguageBarState,
	focus: FocusState,
	spinner: SpinnerState,
	locale: LocaleContext,
	forced_direction: Option<TextDirection>,
	keymap: ScreenKeymap,
	clipboard: Box<dyn Clipboard>,
	notice: Option<Notice>,
	effects: Vec<Effect>,
	should_quit: bool,
}

impl App {
	/// `forced_direction` pins the layout direction; `None` follows the UI locale.
	pub fn new(session: Session, clipboard: Box<dyn Clipboard>, forced_direction: Option<TextDirection>) -> Self {
		let locale = locale_context(session.locale(), forced_direction);

		let mut focus = FocusState::default();
		focus.register(FOCUS_SOURCE);
		if session.mode() == ScreenMode::TwoWay {
			focus.register(FOCUS_TARGET);
		}
		focus.register(FOCUS_INPUT);
		focus.register(FOCUS_OUTPUT);
		focus.set_focus(FOCUS_INPUT);

		let mut input = InputBoxState::new();
		input.set_content(session.state().input_text.clone());

		let mut app = Self {
			session,
			input,
			source_bar: LanguageBarState::default(),
			target_bar: LanguageBarState::default(),
			focus,
			spinner: SpinnerState::default(),
			locale,
			forced_direction,
			keymap: ScreenKeymap,
			clipboard,
			notice: None,
			effects: Vec::new(),
			should_quit: false,
		};
		app.sync_language_bars();
		app
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	pub fn direction(&self) -> TextDirection {
		self.locale.direction
	}

	pub fn focused_area(&self) -> Option<&str> {
		self.focus.focused_id.as_deref()
	}

	/// Takes the effects queued since the last call.
	pub fn drain_effects(&mut self) -> Vec<Effect> {
		std::mem::take(&mut self.effects)
	}

	/// Applies a finished request; stale tickets are ignored.
	pub fn apply_completion(&mut self, ticket: Ticket, reply: Reply) -> bool {
		let applied = self.session.complete(ticket, reply);
		if applied {
			self.spinner.reset();
		}
		applied
	}

	pub fn tick(&mut self) {
		if self.session.state().is_loading {
			self.spinner.tick();
		}
	}

	pub fn handle_event(&mut self, event: Event) {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
			Event::Paste(text) => self.paste(&text),
			_ => {}
		}
	}

	pub fn handle_key_event(&mut self, key: KeyEvent) {
		self.notice = None;

		if let Some(action) = self.keymap.key_to_action(&key, &self.focus) {
			self.handle_action(action);
			return;
		}

		if self.focus.is_focused(FOCUS_INPUT) && self.input.handle_key(&key, self.input_direction()) {
			self.session.set_input(self.input.content());
		}
	}

	pub fn handle_action(&mut self, action: Action) {
		match action {
			Action::Quit => self.should_quit = true,
			Action::FocusNext => self.focus.focus_next(),
			Action::FocusPrev => self.focus.focus_prev(),
			Action::Submit => self.submit(),
			Action::Choose(step) => self.choose(step),
			Action::ToggleTheme => {
				let theme = self.session.toggle_theme();
				debug!(theme = ?theme, "theme toggled");
			}
			Action::CopyResult => self.copy_result(),
			Action::Clear => {
				self.session.clear();
				self.input.clear();
			}
			Action::Swap => self.swap(),
			Action::CycleLocale => self.cycle_locale(),
		}
	}

	fn paste(&mut self, text: &str) {
		if self.focus.is_focused(FOCUS_INPUT) {
			self.input.insert_str(text);
			self.session.set_input(self.input.content());
		}
	}

	fn submit(&mut self) {
		let submission = self.session.begin_submit();
		if let Some(old) = submission.superseded() {
			self.effects.push(Effect::Abort(old));
		}
		if let Submission::Pending { pending, .. } = submission {
			self.spinner.reset();
			self.effects.push(Effect::Spawn(pending));
		}
	}

	fn choose(&mut self, step: HorizontalStep) {
		let direction = self.locale.direction;
		let role = if self.focus.is_focused(FOCUS_SOURCE) {
			BarRole::Source
		} else if self.focus.is_focused(FOCUS_TARGET) {
			BarRole::Target
		} else {
			return;
		};

		let (choices, bar) = match role {
			BarRole::Source => (self.session.source_choices(), &mut self.source_bar),
			BarRole::Target => (self.session.target_choices(), &mut self.target_bar),
		};
		if !bar.step(step, direction, choices.len()) {
			return;
		}
		let language = choices[bar.selected()];

		let selected = match role {
			BarRole::Source => self.session.select_source(language),
			BarRole::Target => self.session.select_target(language),
		};
		if let Err(e) = selected {
			warn!(error = %e, "language change refused");
		}
		self.sync_language_bars();
	}

	fn copy_result(&mut self) {
		let notice = match self.session.copy_result(self.clipboard.as_mut()) {
			Ok(true) => {
				info!("result copied to clipboard");
				Notice::Copied
			}
			Ok(false) => Notice::NothingToCopy,
			Err(e) => {
				error!(error = %e, "clipboard write failed");
				Notice::CopyFailed
			}
		};
		self.notice = Some(notice);
	}

	fn swap(&mut self) {
		match self.session.swap() {
			Ok(superseded) => {
				if let Some(old) = superseded {
					self.effects.push(Effect::Abort(old));
				}
				self.input.set_content(self.session.state().input_text.clone());
				self.sync_language_bars();
			}
			Err(WorkflowError::SwapUnavailable(mode)) => {
				debug!(mode = %mode, "swap ignored");
				self.notice = Some(Notice::SwapUnavailable);
			}
			Err(e) => warn!(error = %e, "swap failed"),
		}
	}

	fn cycle_locale(&mut self) {
		let next = UI_LOCALES
			.iter()
			.position(|l| *l == self.session.locale())
			.map_or(0, |i| (i + 1) % UI_LOCALES.len());
		let locale = UI_LOCALES[next];

		self.session.set_locale(locale);
		self.locale = locale_context(locale, self.forced_direction);
		info!(locale, direction = ?self.locale.direction, "UI locale changed");
	}

	fn sync_language_bars(&mut self) {
		let state = self.session.state();

		let sources = self.session.source_choices();
		if let Some(index) = sources.iter().position(|l| *l == state.source) {
			self.source_bar.select_index(index, sources.len());
		}

		let targets = self.session.target_choices();
		if let Some(index) = targets.iter().position(|l| *l == state.target) {
			self.target_bar.select_index(index, targets.len());
		}
	}

	/// Typing direction follows the script of the source language.
	fn input_direction(&self) -> TextDirection {
		script_direction(self.session.state().source)
	}

	/// Translations follow the target script; status messages follow the UI.
	fn result_direction(&self) -> TextDirection {
		match self.session.state().last_outcome {
			Some(Outcome::Success) => script_direction(self.session.state().target),
			_ => self.locale.direction,
		}
	}

	fn language_name(&self, language: Language) -> String {
		self.locale.t(&format!("client.language.{}", language.code()))
	}

	pub fn theme(&self) -> Theme {
		match self.session.state().theme {
			ThemeMode::Light => Theme::light(),
			ThemeMode::Dark => Theme::dark(),
		}
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		let theme = self.theme();
		let layout = create_screen_layout(area, self.session.mode() == ScreenMode::TwoWay);

		frame.render_widget(Block::default().style(theme.page()), area);

		self.render_header(frame, layout.header, &theme);
		self.render_language_bar(frame, layout.source, &theme, BarRole::Source);
		if let Some(target_area) = layout.target {
			self.render_language_bar(frame, target_area, &theme, BarRole::Target);
		}
		self.render_input(frame, layout.input, &theme);
		self.render_action(frame, layout.action, &theme);
		self.render_output(frame, layout.output, &theme);

		let footer = Paragraph::new(Line::from(Span::styled(
			self.locale.t("client.footer.note"),
			theme.text.dim,
		)))
		.alignment(self.reading_start());
		frame.render_widget(footer, layout.footer);

		frame.render_widget(self.build_status_bar(&theme), layout.status);
	}

	fn reading_start(&self) -> Alignment {
		if self.locale.is_rtl() {
			Alignment::Right
		} else {
			Alignment::Left
		}
	}

	fn panel_block(&self, title: String, hint: Option<Line<'static>>, focused: bool, theme: &Theme) -> Block<'static> {
		let (title_alignment, hint_alignment) = if self.locale.is_rtl() {
			(Alignment::Right, Alignment::Left)
		} else {
			(Alignment::Left, Alignment::Right)
		};

		let mut block = Block::default()
			.borders(Borders::ALL)
			.border_style(theme.border_style_for(focused))
			.style(theme.panel())
			.title(Line::from(Span::styled(format!(" {title} "), theme.text.title)).alignment(title_alignment));
		if let Some(hint) = hint {
			block = block.title(hint.alignment(hint_alignment));
		}
		block
	}

	fn render_header(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let subtitle_key = match self.session.mode() {
			ScreenMode::FixedTarget => "client.app.subtitle_fixed",
			ScreenMode::TwoWay => "client.app.subtitle_two_way",
		};
		let theme_icon = if self.session.state().theme.is_dark() {
			"☾"
		} else {
			"☀"
		};

		let header = Header::new(self.locale.t("client.app.title"))
			.subtitle(self.locale.t(subtitle_key))
			.status(format!("{theme_icon} Ctrl+T"))
			.style(theme.page().patch(theme.text.title))
			.subtitle_style(theme.text.dim)
			.status_style(Style::default().fg(theme.colors.accent))
			.direction(self.locale.direction);
		frame.render_widget(header, area);
	}

	fn render_language_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme, role: BarRole) {
		let state = self.session.state();
		let (choices, bar_state, focus_id, title_key, hint) = match role {
			BarRole::Source => (
				self.session.source_choices(),
				&self.source_bar,
				FOCUS_SOURCE,
				"client.panel.source_language",
				Some(format!("{} {}", self.locale.t("client.panel.example"), state.source.hint())),
			),
			BarRole::Target => (
				self.session.target_choices(),
				&self.target_bar,
				FOCUS_TARGET,
				"client.panel.target_language",
				None,
			),
		};

		let focused = self.focus.is_focused(focus_id);
		let block = self.panel_block(self.locale.t(title_key), None, focused, theme);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let mut bar = LanguageBar::new(choices.iter().map(|l| l.native_label()))
			.style(theme.panel())
			.chip_style(theme.chip())
			.active_style(theme.chip_active())
			.hint_style(theme.text.dim)
			.focused(focused)
			.direction(self.locale.direction);
		if let Some(hint) = hint {
			bar = bar.hint(hint);
		}
		let mut bar_state = bar_state.clone();
		frame.render_stateful_widget(bar, inner, &mut bar_state);
	}

	fn render_input(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let focused = self.focus.is_focused(FOCUS_INPUT);
		let clear_hint = Line::from(vec![
			Span::styled(" Ctrl+K ", theme.text.dim),
			Span::styled(format!("{} ", self.locale.t("client.action.clear")), theme.text.normal),
		]);
		let block = self.panel_block(self.locale.t("client.panel.input"), Some(clear_hint), focused, theme);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let input = InputBox::new()
			.placeholder(self.locale.t("client.input.placeholder"))
			.style(theme.input_text())
			.placeholder_style(theme.input_placeholder())
			.cursor_style(Style::default().bg(theme.colors.accent).fg(theme.colors.text_inverted))
			.focused(focused)
			.direction(self.input_direction());
		let mut input_state = self.input.clone();
		frame.render_stateful_widget(input, inner, &mut input_state);
	}

	fn render_action(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		if self.session.state().is_loading {
			let spinner = Spinner::new()
				.label(self.locale.t("client.action.translating"))
				.text_style(Style::default().fg(theme.colors.accent))
				.alignment(Alignment::Center)
				.direction(self.locale.direction);
			let mut spinner_state = self.spinner.clone();
			frame.render_stateful_widget(spinner, area, &mut spinner_state);
			return;
		}

		let target = self.language_name(self.session.state().target);
		let label = self
			.locale
			.t_fmt("client.action.translate", &[("language", target.as_str())]);
		let button = Paragraph::new(Line::from(Span::styled(format!(" {label} "), theme.primary_button())))
			.alignment(Alignment::Center);
		frame.render_widget(button, area);
	}

	fn render_output(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let state = self.session.state();
		let copy_style = if self.session.has_copyable_result() {
			theme.text.normal
		} else {
			theme.input_disabled()
		};
		let copy_hint = Line::from(vec![
			Span::styled(" Ctrl+Y ", theme.text.dim),
			Span::styled(format!("{} ", self.locale.t("client.action.copy")), copy_style),
		]);

		let target = self.language_name(state.target);
		let title = self
			.locale
			.t_fmt("client.panel.output", &[("language", target.as_str())]);
		let block = self.panel_block(title, Some(copy_hint), self.focus.is_focused(FOCUS_OUTPUT), theme);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let (text, style) = if state.result_text.is_empty() {
			("-".to_string(), theme.input_placeholder())
		} else {
			let style = match state.last_outcome {
				Some(Outcome::Error) => theme.error_text(),
				Some(Outcome::Rejected) | Some(Outcome::Empty) => theme.text.dim,
				_ => theme.text.normal,
			};
			(state.result_text.clone(), style)
		};

		let alignment = if self.result_direction().is_rtl() {
			Alignment::Right
		} else {
			Alignment::Left
		};
		let result = Paragraph::new(text)
			.style(style)
			.alignment(alignment)
			.wrap(Wrap { trim: false });
		frame.render_widget(result, inner);
	}

	fn build_status_bar(&self, theme: &Theme) -> StatusBar {
		let mode_key = format!("client.mode.{}", self.session.mode().as_str());
		let two_way = self.session.mode() == ScreenMode::TwoWay;

		let mut status = StatusBar::new()
			.item(self.locale.t("client.status.mode"), self.locale.t(&mode_key))
			.item(self.locale.t("client.status.locale"), self.locale.locale.to_uppercase())
			.style(theme.page().fg(theme.colors.text_muted))
			.key_style(Style::default().fg(theme.colors.accent))
			.direction(self.locale.direction);

		if let Some(notice) = self.notice {
			let style = if notice.is_error() {
				theme.error_text()
			} else {
				theme.success_text()
			};
			status = status.message(self.locale.t(notice.message_key())).message_style(style);
		}

		let t = |key: &str| self.locale.t(key);
		match self.focused_area() {
			Some(FOCUS_SOURCE) | Some(FOCUS_TARGET) => {
				status = status.shortcut("←→", t("client.action.choose"));
			}
			Some(FOCUS_INPUT) => {
				status = status
					.shortcut("Enter", t("client.action.submit"))
					.shortcut("Ctrl+K", t("client.action.clear"));
			}
			Some(FOCUS_OUTPUT) => {
				status = status.shortcut("Ctrl+Y", t("client.action.copy"));
			}
			_ => {}
		}
		if two_way {
			status = status.shortcut("Ctrl+S", t("client.action.swap"));
		}

		status
			.shortcut("Tab", t("client.action.focus"))
			.shortcut("Esc", t("client.action.quit"))
	}
}

fn locale_context(locale: &str, forced_direction: Option<TextDirection>) -> LocaleContext {
	match forced_direction {
		Some(direction) => LocaleContext::with_direction(locale, direction),
		None => LocaleContext::new(locale),
	}
}

fn script_direction(language: Language) -> TextDirection {
	if language.is_rtl() {
		TextDirection::Rtl
	} else {
		TextDirection::Ltr
	}
}
