//! Page-boundary detection for the visible window.

use serde::{Deserialize, Serialize};

/// The `[start, end]` index interval the host currently displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibleRange {
  pub start: usize,
  pub end:   usize,
}

impl VisibleRange {
  pub fn new(start: usize, end: usize) -> Self { Self { start, end } }
}

/// The page an item index falls on.
pub fn page_for_index(index: usize, page_size: usize) -> usize {
  index / page_size
}

// ─── PageTracker ─────────────────────────────────────────────────────────────

/// Tracks the furthest page fetched and decides when the next one is due.
///
/// The comparison is a threshold, not a range: a jump across several pages
/// still yields a single new page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTracker {
  page_size: usize,
  last_page: usize,
}

impl PageTracker {
  /// `page_size` must be positive; see [`crate::config::FeedConfig::validate`].
  pub fn new(page_size: usize) -> Self {
    debug_assert!(page_size > 0);
    Self {
      page_size,
      last_page: 0,
    }
  }

  pub fn last_page(&self) -> usize { self.last_page }

  /// Feed a visible-range notification. Returns the new page when the range
  /// end has moved strictly past the last page fetched.
  pub fn observe(&mut self, range: VisibleRange) -> Option<usize> {
    let current = page_for_index(range.end, self.page_size);
    if current > self.last_page {
      self.last_page = current;
      Some(current)
    } else {
      None
    }
  }
}
