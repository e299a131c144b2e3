//! HTTP [`FactSource`](yearfacts_core::source::FactSource) for the numbers
//! API (`http://numbersapi.com`).
//!
//! # Request shape
//!
//! ```text
//! GET {base_url}/{year}[,{year}...]/year?json
//! ```

mod client;

pub mod error;

pub use client::{ClientConfig, DEFAULT_BASE_URL, NumbersClient};
pub use error::{Error, Result};
