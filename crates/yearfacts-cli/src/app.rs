//! Application state and key dispatch.
//!
//! The app is the feed's host: it renders whatever the feed last published
//! and reports the visible window back after every move and resize.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::{mpsc, watch};
use yearfacts_core::{fact::Fact, paging::VisibleRange};
use yearfacts_feed::FeedSnapshot;

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Facts from the most recent snapshot, in arrival order.
  pub facts: Vec<Fact>,

  /// Number of failures the feed has recorded (record policy only).
  pub failures: usize,

  /// Cursor position within `facts`.
  pub cursor: usize,

  /// First row drawn in the list pane.
  pub offset: usize,

  /// Rows the list pane can show; updated before every frame.
  pub height: usize,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Last range reported to the feed.
  last_reported: Option<VisibleRange>,

  viewport: mpsc::Sender<VisibleRange>,
  snapshots: watch::Receiver<FeedSnapshot>,
}

impl App {
  pub fn new(
    viewport: mpsc::Sender<VisibleRange>,
    snapshots: watch::Receiver<FeedSnapshot>,
  ) -> Self {
    Self {
      facts: Vec::new(),
      failures: 0,
      cursor: 0,
      offset: 0,
      height: 0,
      status_msg: String::new(),
      last_reported: None,
      viewport,
      snapshots,
    }
  }

  // ── Feed plumbing ───────────────────────────────────────────────────────

  /// Pull the latest snapshot if the feed has published since last time.
  /// Returns `true` when something changed.
  pub fn refresh(&mut self) -> bool {
    if !self.snapshots.has_changed().unwrap_or(false) {
      return false;
    }
    let snapshot = self.snapshots.borrow_and_update().clone();
    self.facts = snapshot.facts;
    self.failures = snapshot.failures.len();
    true
  }

  /// Rows currently on screen, clamped to what is loaded.
  pub fn visible_range(&self) -> VisibleRange {
    let end = (self.offset + self.height).min(self.facts.len());
    VisibleRange::new(self.offset.min(end), end)
  }

  /// Tell the feed about the visible window if it moved since last report.
  pub fn report_viewport(&mut self) {
    let range = self.visible_range();
    if self.last_reported == Some(range) {
      return;
    }
    match self.viewport.try_send(range) {
      Ok(()) => self.last_reported = Some(range),
      // Retried on the next frame.
      Err(mpsc::error::TrySendError::Full(_)) => {}
      Err(mpsc::error::TrySendError::Closed(_)) => {
        self.status_msg = "Feed stopped listening.".into();
        self.last_reported = Some(range);
      }
    }
  }

  /// Record the list pane height and keep the cursor on screen.
  pub fn resize(&mut self, height: usize) {
    self.height = height;
    self.scroll_to_cursor();
  }

  /// The fact under the cursor, if any.
  pub fn cursor_fact(&self) -> Option<&Fact> { self.facts.get(self.cursor) }

  // ── Movement ────────────────────────────────────────────────────────────

  fn move_to(&mut self, index: usize) {
    self.cursor = index.min(self.facts.len().saturating_sub(1));
    self.scroll_to_cursor();
  }

  fn scroll_to_cursor(&mut self) {
    if self.cursor < self.offset {
      self.offset = self.cursor;
    } else if self.height > 0 && self.cursor >= self.offset + self.height {
      self.offset = self.cursor + 1 - self.height;
    }
  }

  // ── Key handling ────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    let page = self.height.max(1);
    match key.code {
      KeyCode::Char('q') | KeyCode::Esc => return false,

      KeyCode::Down | KeyCode::Char('j') => self.move_to(self.cursor + 1),
      KeyCode::Up | KeyCode::Char('k') => self.move_to(self.cursor.saturating_sub(1)),
      KeyCode::PageDown | KeyCode::Char(' ') => self.move_to(self.cursor + page),
      KeyCode::PageUp => self.move_to(self.cursor.saturating_sub(page)),
      KeyCode::Home | KeyCode::Char('g') => self.move_to(0),
      KeyCode::End | KeyCode::Char('G') => self.move_to(usize::MAX),

      _ => {}
    }
    true
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::KeyEventKind;

  use super::*;

  fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

  fn snapshot(n: usize) -> FeedSnapshot {
    FeedSnapshot {
      revision: n as u64,
      facts:    (0..n).map(|i| Fact::new(i as i64 + 1, format!("fact {i}"))).collect(),
      failures: Vec::new(),
    }
  }

  struct Harness {
    app:       App,
    publisher: watch::Sender<FeedSnapshot>,
    reported:  mpsc::Receiver<VisibleRange>,
  }

  fn harness(height: usize) -> Harness {
    let (publisher, snapshots) = watch::channel(FeedSnapshot::default());
    let (viewport, reported) = mpsc::channel(16);
    let mut app = App::new(viewport, snapshots);
    app.resize(height);
    Harness {
      app,
      publisher,
      reported,
    }
  }

  impl Harness {
    fn publish(&mut self, n: usize) {
      self.publisher.send_replace(snapshot(n));
      assert!(self.app.refresh());
    }
  }

  #[test]
  fn refresh_picks_up_new_snapshots_once() {
    let mut h = harness(5);
    assert!(!h.app.refresh());
    h.publish(3);
    assert_eq!(h.app.facts.len(), 3);
    assert!(!h.app.refresh());
  }

  #[test]
  fn visible_range_is_clamped_to_loaded_facts() {
    let mut h = harness(20);
    assert_eq!(h.app.visible_range(), VisibleRange::new(0, 0));
    h.publish(7);
    assert_eq!(h.app.visible_range(), VisibleRange::new(0, 7));
    h.publish(30);
    assert_eq!(h.app.visible_range(), VisibleRange::new(0, 20));
  }

  #[test]
  fn cursor_scrolls_the_window() {
    let mut h = harness(5);
    h.publish(30);
    for _ in 0..7 {
      h.app.handle_key(key(KeyCode::Char('j')));
    }
    assert_eq!(h.app.cursor, 7);
    assert_eq!(h.app.offset, 3);
    assert_eq!(h.app.visible_range(), VisibleRange::new(3, 8));

    h.app.handle_key(key(KeyCode::Char('g')));
    assert_eq!((h.app.cursor, h.app.offset), (0, 0));

    h.app.handle_key(key(KeyCode::Char('G')));
    assert_eq!(h.app.cursor, 29);
    assert_eq!(h.app.visible_range(), VisibleRange::new(25, 30));
  }

  #[test]
  fn cursor_cannot_leave_the_list() {
    let mut h = harness(5);
    h.app.handle_key(key(KeyCode::Down));
    assert_eq!(h.app.cursor, 0);
    h.publish(2);
    h.app.handle_key(key(KeyCode::PageDown));
    assert_eq!(h.app.cursor, 1);
    h.app.handle_key(key(KeyCode::Up));
    h.app.handle_key(key(KeyCode::Up));
    assert_eq!(h.app.cursor, 0);
  }

  #[test]
  fn reports_only_when_the_range_moves() {
    let mut h = harness(5);
    h.publish(10);
    h.app.report_viewport();
    h.app.report_viewport();
    assert_eq!(h.reported.try_recv().unwrap(), VisibleRange::new(0, 5));
    assert!(h.reported.try_recv().is_err());

    h.app.handle_key(key(KeyCode::PageDown));
    h.app.report_viewport();
    assert_eq!(h.reported.try_recv().unwrap(), VisibleRange::new(1, 6));
  }

  #[test]
  fn quit_keys_stop_the_loop() {
    let mut h = harness(5);
    assert!(!h.app.handle_key(key(KeyCode::Char('q'))));
    let ctrl_c = KeyEvent {
      code:      KeyCode::Char('c'),
      modifiers: KeyModifiers::CONTROL,
      kind:      KeyEventKind::Press,
      state:     crossterm::event::KeyEventState::NONE,
    };
    assert!(!h.app.handle_key(ctrl_c));
    assert!(h.app.handle_key(key(KeyCode::Char('x'))));
  }

  #[test]
  fn closed_feed_is_reported_in_status() {
    let (publisher, snapshots) = watch::channel(FeedSnapshot::default());
    let (viewport, reported) = mpsc::channel(1);
    drop(reported);
    let mut app = App::new(viewport, snapshots);
    app.resize(5);
    app.report_viewport();
    assert!(!app.status_msg.is_empty());
    drop(publisher);
  }
}
