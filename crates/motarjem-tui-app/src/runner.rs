// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
	event::{self, DisableBracketedPaste, EnableBracketedPaste},
	terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
	ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

use motarjem_translate::{ExtractorChain, TranslationService};
use motarjem_workflow::{fetch_reply, PendingRequest, Reply, Ticket};

use crate::app::{App, Effect};

/// Runs translation requests as tokio tasks and routes their replies back to
/// the UI thread.
pub struct Dispatcher {
	handle: Handle,
	service: Arc<dyn TranslationService>,
	extractors: ExtractorChain,
	completions_tx: mpsc::UnboundedSender<(Ticket, Reply)>,
	completions_rx: mpsc::UnboundedReceiver<(Ticket, Reply)>,
	tasks: HashMap<Ticket, AbortHandle>,
}

impl Dispatcher {
	pub fn new(handle: Handle, service: Arc<dyn TranslationService>, extractors: ExtractorChain) -> Self {
		let (completions_tx, completions_rx) = mpsc::unbounded_channel();
		Self {
			handle,
			service,
			extractors,
			completions_tx,
			completions_rx,
			tasks: HashMap::new(),
		}
	}

	pub fn dispatch(&mut self, effects: Vec<Effect>) {
		for effect in effects {
			match effect {
				Effect::Spawn(PendingRequest { ticket, request }) => {
					let service = Arc::clone(&self.service);
					let extractors = self.extractors.clone();
					let tx = self.completions_tx.clone();
					let task = self.handle.spawn(async move {
						let reply = fetch_reply(service.as_ref(), &extractors, &request).await;
						// Receiver is gone only during shutdown.
						let _ = tx.send((ticket, reply));
					});
					self.tasks.insert(ticket, task.abort_handle());
				}
				Effect::Abort(ticket) => {
					if let Some(task) = self.tasks.remove(&ticket) {
						task.abort();
						debug!(ticket = ticket.value(), "aborted superseded translation");
					}
				}
			}
		}
	}

	/// Hands every reply that has arrived to the screen.
	pub fn apply_completions(&mut self, app: &mut App) {
		while let Ok((ticket, reply)) = self.completions_rx.try_recv() {
			self.tasks.remove(&ticket);
			app.apply_completion(ticket, reply);
		}
	}

	pub fn in_flight(&self) -> usize {
		self.tasks.len()
	}

	pub fn shutdown(&mut self) {
		for (_, task) in self.tasks.drain() {
			task.abort();
		}
	}
}

pub fn run_tui_app(app: &mut App, dispatcher: &mut Dispatcher, tick_rate: Duration) -> anyhow::Result<()> {
	enable_raw_mode()?;
	io::stdout().execute(EnterAlternateScreen)?;
	io::stdout().execute(EnableBracketedPaste)?;

	let backend = CrosstermBackend::new(io::stdout());
	let mut terminal = Terminal::new(backend)?;

	let result = (|| -> anyhow::Result<()> {
		loop {
			terminal.draw(|frame| {
				let area = frame.area();
				app.render(frame, area);
			})?;

			if event::poll(tick_rate)? {
				app.handle_event(event::read()?);
			}

			dispatcher.dispatch(app.drain_effects());
			dispatcher.apply_completions(app);
			app.tick();

			if app.should_quit() {
				break;
			}
		}
		Ok(())
	})();

	dispatcher.shutdown();
	io::stdout().execute(DisableBracketedPaste)?;
	disable_raw_mode()?;
	io::stdout().execute(LeaveAlternateScreen)?;

	result
}
