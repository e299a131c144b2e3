//! Error type for `yearfacts-feed`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
  /// The feed was detached; it cannot be attached again.
  #[error("feed has been detached")]
  Detached,

  #[error("invalid feed configuration: {0}")]
  Config(#[from] yearfacts_core::Error),
}

pub type Result<T, E = FeedError> = std::result::Result<T, E>;
