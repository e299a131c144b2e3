//! Error types for `yearfacts-core`.

use thiserror::Error;

use crate::fact::Year;

#[derive(Debug, Error)]
pub enum Error {
  #[error("page size must be positive, got {0}")]
  InvalidPageSize(usize),

  #[error("max year must be at least 1, got {0}")]
  InvalidMaxYear(Year),

  #[error("unexpected payload shape: {0}")]
  UnexpectedShape(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
