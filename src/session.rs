//! Interaction state for the overview page
//!
//! Holds the single "current ticker / current display record" slot and the two
//! user actions that drive it. The slot is only ever replaced as a whole, and
//! only after a successful fetch.

use crate::alphavantage::OverviewSource;
use crate::error::FetchError;
use crate::report::display::{build_display_record, DisplayOverviewRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const EMPTY_TICKER_MESSAGE: &str = "Please enter a valid stock ticker.";
pub const NOTHING_TO_PROCEED_MESSAGE: &str = "Fetch a ticker before proceeding.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

/// One-line feedback shown after a user action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == BannerKind::Success
    }
}

/// The record currently on display and the ticker it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub ticker: String,
    pub record: DisplayOverviewRecord,
    pub fetched_at: DateTime<Utc>,
}

/// Result of a submit action
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing was fetched
    EmptyTicker,
    /// The slot now holds this ticker's record
    Fetched { ticker: String },
    /// The provider call failed; the slot is unchanged
    Failed { ticker: String, error: FetchError },
}

impl SubmitOutcome {
    pub fn banner(&self) -> Banner {
        match self {
            SubmitOutcome::EmptyTicker => Banner::error(EMPTY_TICKER_MESSAGE),
            SubmitOutcome::Fetched { ticker } => Banner::success(format!(
                "Stock information successfully fetched for {}!",
                ticker
            )),
            SubmitOutcome::Failed { error, .. } => Banner::error(error.user_message()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Fetched { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<Snapshot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn ticker(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.ticker.as_str())
    }

    /// Fetch and display the overview for `input`
    ///
    /// The input is trimmed and upper-cased. Blank input never reaches the source.
    pub async fn submit<S>(&mut self, source: &S, input: &str) -> SubmitOutcome
    where
        S: OverviewSource + Sync,
    {
        let ticker = input.trim().to_uppercase();
        if ticker.is_empty() {
            tracing::debug!("Ignoring submit with empty ticker");
            return SubmitOutcome::EmptyTicker;
        }

        match source.fetch_overview(&ticker).await {
            Ok(raw) => {
                let record = build_display_record(&raw);
                self.current = Some(Snapshot {
                    ticker: ticker.clone(),
                    record,
                    fetched_at: Utc::now(),
                });
                tracing::info!(symbol = %ticker, "Display record updated");
                SubmitOutcome::Fetched { ticker }
            }
            Err(error) => {
                tracing::warn!(
                    symbol = %ticker,
                    error_type = error.error_type(),
                    error = %error,
                    "Fetch failed, keeping previous display record"
                );
                SubmitOutcome::Failed { ticker, error }
            }
        }
    }

    /// Hand the current ticker on to the analysis stage
    ///
    /// Returns `None` when nothing is on display.
    pub fn proceed(&self) -> Option<Banner> {
        self.ticker().map(|ticker| {
            tracing::info!(symbol = %ticker, "Proceeding to analysis");
            Banner::success(format!("Proceeding to Layer 3 with ticker: {}", ticker))
        })
    }
}
