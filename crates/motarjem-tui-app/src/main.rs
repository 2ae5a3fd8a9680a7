// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Motarjem - translate text into Persian (or between any two languages)
//! from the terminal.
//!
//! Without a subcommand the interactive screen starts; `translate` and
//! `languages` are one-shot commands for scripts.

mod app;
mod commands;
mod keymap;
mod layout;
mod runner;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::runtime::Handle;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use motarjem_common_i18n::resolve_locale;
use motarjem_config::{load_config_with_cli, ApiConfig, CliOverrides, DirectionPreference, MotarjemConfig};
use motarjem_translate::{ExtractorChain, MyMemoryClient, TranslationService};
use motarjem_tui_core::TextDirection;
use motarjem_workflow::{Osc52Clipboard, Session};

use app::App;
use runner::{run_tui_app, Dispatcher};

const TICK_RATE: Duration = Duration::from_millis(100);

/// UI locale used when neither the configuration nor the system names a
/// supported one.
const DEFAULT_UI_LOCALE: &str = "fa";

const LOG_ENV: &str = "MOTARJEM_LOG";

/// Motarjem - multilingual translator
#[derive(Parser, Debug)]
#[command(name = "motarjem", version, about, long_about = None)]
struct Cli {
	/// Path to a configuration file (replaces the user config file)
	#[arg(short, long, global = true, env = "MOTARJEM_CONFIG")]
	config: Option<PathBuf>,

	/// Screen mode: fixed-target or two-way
	#[arg(long, global = true)]
	mode: Option<String>,

	/// UI locale (en, fa, ar)
	#[arg(long, global = true)]
	locale: Option<String>,

	/// Colour theme: light or dark
	#[arg(long, global = true)]
	theme: Option<String>,

	/// Force a left-to-right layout regardless of locale
	#[arg(long, global = true)]
	ltr: bool,

	/// Translation endpoint with the MyMemory response shape
	#[arg(long, global = true)]
	api_url: Option<String>,

	/// Where the interactive screen writes its log
	#[arg(long, global = true)]
	log_file: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Translate TEXT once and print the result
	Translate {
		text: String,
		/// Source language code
		#[arg(long)]
		from: Option<String>,
		/// Target language code
		#[arg(long)]
		to: Option<String>,
	},
	/// List the supported languages
	Languages,
}

impl Cli {
	fn overrides(&self) -> CliOverrides {
		let (source, target) = match &self.command {
			Some(Command::Translate { from, to, .. }) => (from.clone(), to.clone()),
			_ => (None, None),
		};
		CliOverrides {
			mode: self.mode.clone(),
			source,
			target,
			theme: self.theme.clone(),
			locale: self.locale.clone(),
			direction: self.ltr.then(|| DirectionPreference::Ltr.to_string()),
			api_url: self.api_url.clone(),
			log_file: self.log_file.clone(),
			config_file: self.config.clone(),
		}
	}
}

/// Installs the global subscriber. With a log file the terminal stays clean
/// for the screen; otherwise logs go to stderr.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

	match log_file {
		Some(path) => {
			if let Some(dir) = path.parent() {
				fs::create_dir_all(dir).with_context(|| format!("failed to create log directory {}", dir.display()))?;
			}
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(path)
				.with_context(|| format!("failed to open log file {}", path.display()))?;
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
				.init();
		}
		None => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(io::stderr))
				.init();
		}
	}
	Ok(())
}

fn resolve_ui_locale(configured: Option<&str>) -> &'static str {
	let preferred = configured.map(str::to_string).or_else(sys_locale::get_locale);
	resolve_locale(preferred.as_deref(), DEFAULT_UI_LOCALE)
}

fn forced_direction(preference: DirectionPreference) -> Option<TextDirection> {
	match preference {
		DirectionPreference::Auto => None,
		DirectionPreference::Ltr => Some(TextDirection::Ltr),
		DirectionPreference::Rtl => Some(TextDirection::Rtl),
	}
}

fn build_service(api: &ApiConfig) -> Result<Arc<dyn TranslationService>> {
	let client = MyMemoryClient::new(api.timeout)
		.context("failed to build HTTP client")?
		.with_base_url(api.base_url.clone())
		.with_email(api.email.clone());
	Ok(Arc::new(client))
}

fn new_session(config: &MotarjemConfig, locale: &str) -> Result<Session> {
	let session = Session::new(config.mode, locale)
		.with_languages(config.source, config.target)?
		.with_theme(config.theme);
	Ok(session)
}

fn run_screen(config: &MotarjemConfig, locale: &str, service: Arc<dyn TranslationService>) -> Result<()> {
	let session = new_session(config, locale)?;
	let clipboard = Box::new(Osc52Clipboard::new(io::stdout()));
	let mut app = App::new(session, clipboard, forced_direction(config.direction));
	let mut dispatcher = Dispatcher::new(Handle::current(), service, ExtractorChain::default());

	info!(
		mode = %config.mode,
		locale,
		source = %config.source,
		target = %config.target,
		"starting translator screen"
	);
	run_tui_app(&mut app, &mut dispatcher, TICK_RATE)
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	let config = load_config_with_cli(cli.overrides()).context("failed to load configuration")?;
	let locale = resolve_ui_locale(config.locale.as_deref());

	match cli.command {
		Some(Command::Translate { text, .. }) => {
			init_tracing(None)?;
			let service = build_service(&config.api)?;
			let session = new_session(&config, locale)?;
			commands::translate(session, service, text).await
		}
		Some(Command::Languages) => {
			init_tracing(None)?;
			commands::languages(locale);
			Ok(())
		}
		None => {
			init_tracing(Some(&config.log_file))?;
			let service = build_service(&config.api)?;
			run_screen(&config, locale, service)
		}
	}
}
