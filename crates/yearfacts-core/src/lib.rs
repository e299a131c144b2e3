//! Core types and trait definitions for the yearfacts feed.
//!
//! This crate is deliberately free of HTTP and async-runtime dependencies.
//! The client and feed crates depend on it; it depends on nothing of theirs.

pub mod config;
pub mod error;
pub mod fact;
pub mod paging;
pub mod source;
pub mod years;

pub use error::{Error, Result};
