//! Error type for `yearfacts-client`.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("at least one year is required")]
  NoYears,

  #[error("invalid base url {0:?}")]
  InvalidBaseUrl(String),

  /// Connection refused, DNS failure, timeout and the like.
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("GET {url} → {status}")]
  Status { status: StatusCode, url: String },

  /// Body was not JSON at all.
  #[error("malformed payload: {0}")]
  Payload(#[from] serde_json::Error),

  /// Body was JSON but not shaped like facts.
  #[error("malformed payload: {0}")]
  Shape(#[from] yearfacts_core::Error),
}

impl Error {
  /// Whether the request never produced an HTTP response.
  pub fn is_transport(&self) -> bool { matches!(self, Self::Transport(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
