//! Alpha Vantage API Client
//!
//! HTTP client for the company `OVERVIEW` endpoint.

pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::{interpret_overview_response, AlphaVantageClient, OverviewSource};
pub use types::{RawOverviewRecord, NOT_AVAILABLE};
