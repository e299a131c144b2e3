//! Layered configuration: optional TOML file, then `YEARFACTS_*` env vars.
//!
//! ```toml
//! log_file = "/tmp/yearfacts.log"
//!
//! [client]
//! base_url = "http://numbersapi.com"
//! timeout_secs = 30
//!
//! [feed]
//! page_size = 10
//! fetch_mode = "per_item"       # or "batched"
//! failure_policy = "drop"       # or "record"
//! year_range = "reference"      # or "corrected"
//! ```
//!
//! Nested keys use a double underscore in the environment, e.g.
//! `YEARFACTS_FEED__PAGE_SIZE=25`.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use yearfacts_client::ClientConfig;
use yearfacts_core::config::FeedConfig;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub client:   ClientConfig,
  pub feed:     FeedConfig,
  /// Where tracing output goes; the terminal itself is owned by the UI.
  pub log_file: Option<PathBuf>,
}

impl Settings {
  /// Read `path` (if given) and the environment.
  pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
    let mut builder = Config::builder();
    if let Some(path) = path {
      builder = builder.add_source(File::from(path).required(true));
    }
    let builder = builder.add_source(
      Environment::with_prefix("YEARFACTS")
        .separator("__")
        .try_parsing(true),
    );
    Self::build(builder)
  }

  /// Parse a TOML document on its own, without the environment.
  pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
    Self::build(Config::builder().add_source(File::from_str(raw, FileFormat::Toml)))
  }

  fn build(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
    let settings = builder.build().context("failed to read configuration")?;
    let settings: Self = settings
      .try_deserialize()
      .context("failed to deserialise configuration")?;
    settings.feed.validate()?;
    Ok(settings)
  }
}
