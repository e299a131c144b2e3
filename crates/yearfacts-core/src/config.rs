//! Feed configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, fact::Year};

/// Reference page size of the scroller this feed backs.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound fed into the year draw.
pub const DEFAULT_MAX_YEAR: Year = 2019;

// ─── Policies ────────────────────────────────────────────────────────────────

/// How a page worth of facts is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchMode {
  /// `page_size` independent single-year requests; facts land in arrival
  /// order and each arrival is published on its own.
  #[default]
  PerItem,
  /// One request for `page_size` years; facts land in response order and
  /// are published once.
  Batched,
}

/// What happens to a fetch that fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
  /// Log and forget; the page simply ends up short.
  #[default]
  Drop,
  /// Record the failure in the published snapshot.
  Record,
}

/// Which formula draws a random year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearRange {
  /// `ceil(r * max_year) + 1`, i.e. 2..=max_year+1 in practice.
  #[default]
  Reference,
  /// Uniform over 1..=max_year.
  Corrected,
}

// ─── FeedConfig ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
  pub page_size:      usize,
  pub fetch_mode:     FetchMode,
  pub failure_policy: FailurePolicy,
  pub year_range:     YearRange,
  pub max_year:       Year,
}

impl Default for FeedConfig {
  fn default() -> Self {
    Self {
      page_size:      DEFAULT_PAGE_SIZE,
      fetch_mode:     FetchMode::default(),
      failure_policy: FailurePolicy::default(),
      year_range:     YearRange::default(),
      max_year:       DEFAULT_MAX_YEAR,
    }
  }
}

impl FeedConfig {
  /// Reject configurations the feed cannot run with.
  pub fn validate(&self) -> Result<()> {
    if self.page_size == 0 {
      return Err(Error::InvalidPageSize(self.page_size));
    }
    if self.max_year < 1 {
      return Err(Error::InvalidMaxYear(self.max_year));
    }
    Ok(())
  }
}
