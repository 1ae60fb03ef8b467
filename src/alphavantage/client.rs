//! Alpha Vantage HTTP Client
//!
//! HTTP client wrapper for the `OVERVIEW` endpoint.
//! Provides timeout configuration, user-agent headers and response interpretation.

use crate::alphavantage::types::RawOverviewRecord;
use crate::config::{ProviderConfig, SecretString};
use crate::error::{FetchError, InsightsError};
use reqwest::Client;
use std::future::Future;

/// Anything that can produce an overview record for a ticker
///
/// Implemented by [`AlphaVantageClient`]; the session and web front end are
/// generic over it so they can run against an in-memory source.
pub trait OverviewSource {
    fn fetch_overview(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<RawOverviewRecord, FetchError>> + Send;
}

/// Alpha Vantage REST API HTTP client
#[derive(Clone)]
pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl std::fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .finish()
    }
}

impl AlphaVantageClient {
    /// Creates a client from provider configuration
    ///
    /// # Errors
    /// Returns `InsightsError::Initialization` if the TLS backend cannot be set up
    pub fn new(config: &ProviderConfig) -> Result<Self, InsightsError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("stock-insights/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                InsightsError::Initialization(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Get the company overview for a ticker
    ///
    /// Calls GET /query?function=OVERVIEW&symbol=..&apikey=..
    ///
    /// # Returns
    /// * `Ok(RawOverviewRecord)` - Provider fields, guaranteed to contain `Symbol`
    /// * `Err(FetchError)` - Network error, non-200 status, or a body without `Symbol`
    pub async fn get_overview(&self, symbol: &str) -> Result<RawOverviewRecord, FetchError> {
        let url = format!("{}/query", self.base_url);

        tracing::debug!(symbol = %symbol, base_url = %self.base_url, "Requesting company overview");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("function", "OVERVIEW"),
                ("symbol", symbol),
                ("apikey", self.api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| {
                let err = FetchError::from(e);
                tracing::warn!(symbol = %symbol, error = %err, "Overview request failed");
                err
            })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        let result = interpret_overview_response(status, &body);
        match &result {
            Ok(_) => tracing::info!(symbol = %symbol, "Fetched company overview"),
            Err(err) => tracing::warn!(
                symbol = %symbol,
                status = status,
                error_type = err.error_type(),
                error = %err,
                "Overview unavailable"
            ),
        }
        result
    }
}

impl OverviewSource for AlphaVantageClient {
    fn fetch_overview(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<RawOverviewRecord, FetchError>> + Send {
        self.get_overview(symbol)
    }
}

/// Decide whether an `OVERVIEW` response carries a usable record
///
/// Only HTTP 200 with a JSON object containing `Symbol` counts as success.
/// Alpha Vantage answers unknown tickers with `{}` and throttled or
/// misconfigured calls with a `Note`, `Information` or `Error Message` object,
/// all of which become [`FetchError::MissingSymbol`].
pub fn interpret_overview_response(
    status: u16,
    body: &str,
) -> Result<RawOverviewRecord, FetchError> {
    if status != 200 {
        return Err(FetchError::Status(status));
    }

    let value: serde_json::Value = serde_json::from_str(body)?;
    let object = value
        .as_object()
        .ok_or_else(|| FetchError::Parse("Expected a JSON object".to_string()))?;

    if !object.contains_key("Symbol") {
        for notice in ["Note", "Information", "Error Message"] {
            if let Some(text) = object.get(notice).and_then(|v| v.as_str()) {
                tracing::debug!(notice = notice, message = %text, "Provider notice in place of data");
            }
        }
        return Err(FetchError::MissingSymbol);
    }

    Ok(RawOverviewRecord::from_json_object(object))
}
