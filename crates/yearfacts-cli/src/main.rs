//! `yearfacts` — endlessly scrolling facts about random years.
//!
//! # Usage
//!
//! ```
//! yearfacts
//! yearfacts --page-size 20 --batched
//! yearfacts --config ~/.config/yearfacts/config.toml --log-file /tmp/yearfacts.log
//! ```

mod app;
mod settings;
mod ui;

use std::{fs::File, io, path::PathBuf, sync::Mutex, time::Duration};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use tokio::sync::mpsc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use yearfacts_client::NumbersClient;
use yearfacts_core::config::{FailurePolicy, FetchMode, YearRange};
use yearfacts_feed::Feed;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "yearfacts", version, about = "Endless list of facts about random years")]
struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the numbers API (default: http://numbersapi.com).
  #[arg(long)]
  url: Option<String>,

  /// Facts per page.
  #[arg(long)]
  page_size: Option<usize>,

  /// Request each page in one call instead of one call per fact.
  #[arg(long)]
  batched: bool,

  /// Count failed fetches in the status bar instead of dropping them.
  #[arg(long)]
  record_failures: bool,

  /// Draw years uniformly from 1..=max instead of the legacy formula.
  #[arg(long)]
  corrected_years: bool,

  /// Write logs to this file (filtered by RUST_LOG, default info).
  #[arg(long, value_name = "FILE")]
  log_file: Option<PathBuf>,
}

impl Args {
  /// CLI flags override the config file and environment.
  fn apply(self, settings: &mut Settings) {
    if let Some(url) = self.url {
      settings.client.base_url = url;
    }
    if let Some(n) = self.page_size {
      settings.feed.page_size = n;
    }
    if self.batched {
      settings.feed.fetch_mode = FetchMode::Batched;
    }
    if self.record_failures {
      settings.feed.failure_policy = FailurePolicy::Record;
    }
    if self.corrected_years {
      settings.feed.year_range = YearRange::Corrected;
    }
    if self.log_file.is_some() {
      settings.log_file = self.log_file;
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let mut settings = Settings::load(args.config.as_deref())?;
  args.apply(&mut settings);

  if let Some(path) = &settings.log_file {
    init_tracing(path)?;
  }

  let client = NumbersClient::new(settings.client.clone())
    .context("failed to build HTTP client")?;
  let feed = Feed::new(client, settings.feed.clone()).context("invalid feed settings")?;

  let (viewport_tx, viewport_rx) = mpsc::channel(64);
  let snapshots = feed.attach(viewport_rx)?;
  let mut app = App::new(viewport_tx, snapshots);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app).await;

  feed.detach();

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

/// Send logs to `path`; stdout belongs to the UI.
fn init_tracing(path: &std::path::Path) -> Result<()> {
  let file = File::create(path)
    .with_context(|| format!("creating log file {}", path.display()))?;
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .init();
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    app.refresh();
    let size = terminal.size().context("reading terminal size")?;
    app.resize(ui::list_height(size.height));
    app.report_viewport();

    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event
      && !app.handle_key(key)
    {
      break;
    }
  }

  Ok(())
}
