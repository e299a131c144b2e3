//! Paged fact feed.
//!
//! Holds a growing, append-only list of facts and republishes the whole list
//! on every change. Fetches another page from a
//! [`FactSource`](yearfacts_core::source::FactSource) whenever the host's
//! visible range crosses past the last page fetched.
//!
//! # Wiring
//!
//! ```rust,ignore
//! let feed = Feed::new(client, FeedConfig::default())?;
//! let (viewport, signal) = tokio::sync::mpsc::channel(16);
//! let mut snapshots = feed.attach(signal)?;
//! viewport.send(VisibleRange::new(0, 15)).await?;
//! snapshots.changed().await?;
//! feed.detach();
//! ```

mod feed;
mod snapshot;

pub mod error;

pub use error::{FeedError, Result};
pub use feed::Feed;
pub use snapshot::{FeedSnapshot, FetchFailure};
