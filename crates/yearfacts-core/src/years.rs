//! Random year draws for per-item fetches.

use rand::Rng;
use rand_core::{OsRng, RngCore};

use crate::{config::YearRange, fact::Year};

/// Draws random years according to a [`YearRange`] formula.
///
/// `max_year` is expected to be at least 1; see
/// [`FeedConfig::validate`](crate::config::FeedConfig::validate).
pub struct YearPicker {
  range:    YearRange,
  max_year: Year,
  rng:      Box<dyn RngCore + Send>,
}

impl YearPicker {
  /// A picker backed by the operating system's RNG.
  pub fn new(range: YearRange, max_year: Year) -> Self {
    Self::with_rng(range, max_year, OsRng)
  }

  pub fn with_rng(
    range: YearRange,
    max_year: Year,
    rng: impl RngCore + Send + 'static,
  ) -> Self {
    Self {
      range,
      max_year: max_year.max(1),
      rng: Box::new(rng),
    }
  }

  pub fn next_year(&mut self) -> Year {
    match self.range {
      YearRange::Reference => {
        let r: f64 = self.rng.gen_range(0.0..1.0);
        reference_year(self.max_year, r)
      }
      YearRange::Corrected => self.rng.gen_range(1..=self.max_year),
    }
  }

  /// `n` independent draws.
  pub fn draw(&mut self, n: usize) -> Vec<Year> {
    (0..n).map(|_| self.next_year()).collect()
  }
}

impl std::fmt::Debug for YearPicker {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("YearPicker")
      .field("range", &self.range)
      .field("max_year", &self.max_year)
      .finish_non_exhaustive()
  }
}

/// `ceil(r * max_year) + 1` for `r` in `[0, 1)`.
fn reference_year(max_year: Year, r: f64) -> Year {
  (r * max_year as f64).ceil() as Year + 1
}
