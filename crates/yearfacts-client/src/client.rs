//! Async HTTP client wrapping the numbers API.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use yearfacts_core::{
  fact::{Fact, Year, collect_facts},
  source::FactSource,
};

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://numbersapi.com";

/// Connection settings for the numbers API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
  pub base_url:     String,
  /// Whole-request timeout; expiry surfaces as a transport error.
  pub timeout_secs: u64,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url:     DEFAULT_BASE_URL.to_string(),
      timeout_secs: 30,
    }
  }
}

/// Async HTTP client for the numbers API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct NumbersClient {
  client: Client,
  config: ClientConfig,
}

impl NumbersClient {
  pub fn new(config: ClientConfig) -> Result<Self> {
    let scheme_ok = config.base_url.starts_with("http://")
      || config.base_url.starts_with("https://");
    if !scheme_ok {
      return Err(Error::InvalidBaseUrl(config.base_url));
    }
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()?;
    Ok(Self { client, config })
  }

  /// `{base}/{y1,y2,...}/year?json`
  pub fn url(&self, years: &[Year]) -> String {
    let joined = years
      .iter()
      .map(Year::to_string)
      .collect::<Vec<_>>()
      .join(",");
    format!(
      "{}/{}/year?json",
      self.config.base_url.trim_end_matches('/'),
      joined
    )
  }

  /// `GET /{years}/year?json`
  pub async fn get_years(&self, years: &[Year]) -> Result<Vec<Fact>> {
    if years.is_empty() {
      return Err(Error::NoYears);
    }
    let url = self.url(years);
    tracing::debug!(%url, count = years.len(), "requesting facts");

    let resp = self.client.get(&url).send().await?;
    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status { status, url });
    }

    let body = resp.bytes().await?;
    let value: serde_json::Value = serde_json::from_slice(&body)?;
    let facts = collect_facts(value)?;
    tracing::debug!(%url, received = facts.len(), "facts received");
    Ok(facts)
  }
}

impl FactSource for NumbersClient {
  type Error = Error;

  async fn fetch_facts(&self, years: &[Year]) -> Result<Vec<Fact>> {
    self.get_years(years).await
  }
}
