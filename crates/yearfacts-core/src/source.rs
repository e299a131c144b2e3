//! The `FactSource` trait.
//!
//! Implemented by remote accessors (e.g. `yearfacts-client`). The feed depends
//! on this abstraction, not on any concrete HTTP stack.

use std::future::Future;

use crate::fact::{Fact, Year};

/// Fetches facts for a set of years in a single request.
///
/// Each call is independent: no retries, no caching. Implementations must
/// not fail synchronously; every outcome, including rejecting an empty
/// `years` slice, surfaces through the returned future.
///
/// The returned future is `Send` so the feed can run fetches as spawned
/// tasks on a multi-threaded runtime.
pub trait FactSource: Send + Sync + 'static {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch facts for `years`, preserving the order the remote answered in.
  fn fetch_facts<'a>(
    &'a self,
    years: &'a [Year],
  ) -> impl Future<Output = Result<Vec<Fact>, Self::Error>> + Send + 'a;
}
