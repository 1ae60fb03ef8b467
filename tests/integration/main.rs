// Integration tests for overview fetching
//
// These tests run the real Alpha Vantage client against an in-process axum
// server that answers like the provider does:
// - Successful overview with formatted display fields
// - Non-200 status and empty-object answers
// - The web front end wired to the real client

#[cfg(feature = "http_transport")]
mod fake_provider;

#[cfg(feature = "http_transport")]
mod overview_fetch;
