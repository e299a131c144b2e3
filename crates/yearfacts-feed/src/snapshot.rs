//! What the feed publishes.

use serde::Serialize;
use yearfacts_core::fact::{Fact, Year};

/// A fetch that failed while the feed records failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
  /// Page the fetch belonged to.
  pub page:    usize,
  pub years:   Vec<Year>,
  pub message: String,
}

/// The full state handed to subscribers after every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedSnapshot {
  /// Bumped once per published change; `0` is the empty initial value.
  pub revision: u64,
  /// Every fact fetched so far, in arrival order.
  pub facts:    Vec<Fact>,
  /// Only populated under [`FailurePolicy::Record`](yearfacts_core::config::FailurePolicy::Record).
  pub failures: Vec<FetchFailure>,
}
