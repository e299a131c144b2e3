//! [`Feed`] — the paged, append-only fact feed.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::{
  sync::{mpsc, watch},
  task::JoinHandle,
};
use yearfacts_core::{
  config::{FailurePolicy, FeedConfig, FetchMode},
  fact::{Fact, Year},
  paging::{PageTracker, VisibleRange},
  source::FactSource,
  years::YearPicker,
};

use crate::{
  FeedError, Result,
  snapshot::{FeedSnapshot, FetchFailure},
};

// ─── State ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
  /// Constructed, nothing fetched yet.
  Idle,
  Attached,
  /// Terminal. Late results are discarded.
  Detached,
}

struct FeedState {
  phase:     Phase,
  pages:     PageTracker,
  facts:     Vec<Fact>,
  failures:  Vec<FetchFailure>,
  revision:  u64,
  /// Fetches issued and not yet settled while attached.
  pending:   usize,
  /// One viewport listener per `attach` call.
  listeners: Vec<JoinHandle<()>>,
}

impl FeedState {
  fn snapshot(&self) -> FeedSnapshot {
    FeedSnapshot {
      revision: self.revision,
      facts:    self.facts.clone(),
      failures: self.failures.clone(),
    }
  }
}

struct Shared<S> {
  source:    S,
  config:    FeedConfig,
  years:     Mutex<YearPicker>,
  state:     Mutex<FeedState>,
  publisher: watch::Sender<FeedSnapshot>,
}

// ─── Feed ────────────────────────────────────────────────────────────────────

/// Incrementally populated list of facts backed by a [`FactSource`].
///
/// Cheap to clone; clones share the same state. Methods that issue fetches
/// spawn Tokio tasks and must be called from within a Tokio runtime.
pub struct Feed<S> {
  shared: Arc<Shared<S>>,
}

impl<S> Clone for Feed<S> {
  fn clone(&self) -> Self {
    Self {
      shared: Arc::clone(&self.shared),
    }
  }
}

impl<S: FactSource> Feed<S> {
  /// Create a feed drawing years from the operating system's RNG.
  pub fn new(source: S, config: FeedConfig) -> Result<Self> {
    let years = YearPicker::new(config.year_range, config.max_year);
    Self::with_years(source, config, years)
  }

  /// Create a feed with a caller-supplied year picker.
  pub fn with_years(
    source: S,
    config: FeedConfig,
    years: YearPicker,
  ) -> Result<Self> {
    config.validate()?;
    let (publisher, _) = watch::channel(FeedSnapshot::default());
    let state = FeedState {
      phase:     Phase::Idle,
      pages:     PageTracker::new(config.page_size),
      facts:     Vec::new(),
      failures:  Vec::new(),
      revision:  0,
      pending:   0,
      listeners: Vec::new(),
    };
    Ok(Self {
      shared: Arc::new(Shared {
        source,
        config,
        years: Mutex::new(years),
        state: Mutex::new(state),
        publisher,
      }),
    })
  }

  // ── Host boundary ───────────────────────────────────────────────────────

  /// Start listening to `viewport` and return the snapshot stream.
  ///
  /// The first attach issues the first page. Further attaches while attached
  /// add another listener without fetching. Attaching after [`detach`]
  /// fails with [`FeedError::Detached`].
  ///
  /// [`detach`]: Feed::detach
  pub fn attach(
    &self,
    mut viewport: mpsc::Receiver<VisibleRange>,
  ) -> Result<watch::Receiver<FeedSnapshot>> {
    let mut state = self.shared.lock_state();
    let first = match state.phase {
      Phase::Detached => return Err(FeedError::Detached),
      Phase::Idle => true,
      Phase::Attached => false,
    };
    state.phase = Phase::Attached;

    let shared = Arc::clone(&self.shared);
    state.listeners.push(tokio::spawn(async move {
      while let Some(range) = viewport.recv().await {
        shared.view_changed(range);
      }
    }));

    if first {
      tracing::info!(
        page_size = self.shared.config.page_size,
        mode = ?self.shared.config.fetch_mode,
        "feed attached"
      );
      self.shared.issue_page(&mut state, 0);
    }
    Ok(self.shared.publisher.subscribe())
  }

  /// Report a visible range directly, bypassing the viewport channel.
  pub fn view_changed(&self, range: VisibleRange) {
    self.shared.view_changed(range);
  }

  /// Stop listening to every viewport and discard results still in flight.
  /// Calling it again does nothing.
  pub fn detach(&self) {
    let mut state = self.shared.lock_state();
    if state.phase == Phase::Detached {
      return;
    }
    state.phase = Phase::Detached;
    for listener in state.listeners.drain(..) {
      listener.abort();
    }
    tracing::info!(
      facts = state.facts.len(),
      in_flight = state.pending,
      "feed detached"
    );
  }

  // ── Inspection ──────────────────────────────────────────────────────────

  /// The last published snapshot.
  pub fn snapshot(&self) -> FeedSnapshot { self.shared.publisher.borrow().clone() }

  pub fn last_page(&self) -> usize { self.shared.lock_state().pages.last_page() }

  /// Fetches issued while attached that have not settled yet.
  pub fn pending(&self) -> usize { self.shared.lock_state().pending }

  pub fn is_attached(&self) -> bool {
    self.shared.lock_state().phase == Phase::Attached
  }
}

// ─── Internals ───────────────────────────────────────────────────────────────

impl<S: FactSource> Shared<S> {
  fn lock_state(&self) -> MutexGuard<'_, FeedState> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  fn draw_years(&self, n: usize) -> Vec<Year> {
    self
      .years
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .draw(n)
  }

  fn view_changed(self: &Arc<Self>, range: VisibleRange) {
    let mut state = self.lock_state();
    if state.phase != Phase::Attached {
      return;
    }
    if let Some(page) = state.pages.observe(range) {
      tracing::debug!(
        start = range.start,
        end = range.end,
        page,
        loaded = state.facts.len(),
        "visible range crossed page boundary"
      );
      self.issue_page(&mut state, page);
    }
  }

  /// Spawn the fetches for one page. Holding the state lock keeps `pending`
  /// consistent with the completions that will later take it.
  fn issue_page(self: &Arc<Self>, state: &mut FeedState, page: usize) {
    let page_size = self.config.page_size;
    match self.config.fetch_mode {
      FetchMode::PerItem => {
        for year in self.draw_years(page_size) {
          self.spawn_fetch(state, page, vec![year]);
        }
      }
      FetchMode::Batched => {
        let years = self.draw_years(page_size);
        self.spawn_fetch(state, page, years);
      }
    }
  }

  fn spawn_fetch(self: &Arc<Self>, state: &mut FeedState, page: usize, years: Vec<Year>) {
    state.pending += 1;
    let shared = Arc::clone(self);
    tokio::spawn(async move {
      let result = shared.source.fetch_facts(&years).await;
      shared.settle(page, years, result);
    });
  }

  /// Apply one fetch result and publish, unless the feed is gone.
  fn settle(&self, page: usize, years: Vec<Year>, result: Result<Vec<Fact>, S::Error>) {
    let mut state = self.lock_state();
    if state.phase != Phase::Attached {
      tracing::debug!(?years, "discarding result that arrived after detach");
      return;
    }
    state.pending = state.pending.saturating_sub(1);

    match result {
      Ok(facts) if facts.is_empty() => return,
      Ok(facts) => state.facts.extend(facts),
      Err(e) => match self.config.failure_policy {
        FailurePolicy::Drop => {
          tracing::warn!(?years, page, error = %e, "fact fetch failed; dropping");
          return;
        }
        FailurePolicy::Record => {
          tracing::warn!(?years, page, error = %e, "fact fetch failed; recording");
          state.failures.push(FetchFailure {
            page,
            years,
            message: e.to_string(),
          });
        }
      },
    }

    state.revision += 1;
    self.publisher.send_replace(state.snapshot());
  }
}
