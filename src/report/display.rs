//! Display-ready overview record
//!
//! Projects the provider's free-form record onto the twelve labelled fields
//! shown on the page. Every field is always populated.

use super::formatter::{add_dollar_sign, format_large_number, format_percentage};
use crate::alphavantage::RawOverviewRecord;
use serde::Serialize;

/// Display labels, in page order
pub const LABELS: [&str; 12] = [
    "Company Name",
    "Full Name",
    "Sector",
    "Industry",
    "Country",
    "Description",
    "Market Capitalization",
    "Dividend Yield",
    "52-Week High",
    "52-Week Low",
    "Financial Currency",
    "Exchange",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayOverviewRecord {
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Full Name")]
    pub full_name: String,
    #[serde(rename = "Sector")]
    pub sector: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Market Capitalization")]
    pub market_capitalization: String,
    #[serde(rename = "Dividend Yield")]
    pub dividend_yield: String,
    #[serde(rename = "52-Week High")]
    pub week_52_high: String,
    #[serde(rename = "52-Week Low")]
    pub week_52_low: String,
    #[serde(rename = "Financial Currency")]
    pub financial_currency: String,
    #[serde(rename = "Exchange")]
    pub exchange: String,
}

impl DisplayOverviewRecord {
    /// Label/value pairs in page order
    pub fn entries(&self) -> [(&'static str, &str); 12] {
        [
            (LABELS[0], self.company_name.as_str()),
            (LABELS[1], self.full_name.as_str()),
            (LABELS[2], self.sector.as_str()),
            (LABELS[3], self.industry.as_str()),
            (LABELS[4], self.country.as_str()),
            (LABELS[5], self.description.as_str()),
            (LABELS[6], self.market_capitalization.as_str()),
            (LABELS[7], self.dividend_yield.as_str()),
            (LABELS[8], self.week_52_high.as_str()),
            (LABELS[9], self.week_52_low.as_str()),
            (LABELS[10], self.financial_currency.as_str()),
            (LABELS[11], self.exchange.as_str()),
        ]
    }
}

/// Build the display record for one provider response
///
/// Numeric fields go through their formatter; text fields are copied, with
/// `"N/A"` for anything the provider left out.
pub fn build_display_record(raw: &RawOverviewRecord) -> DisplayOverviewRecord {
    let text = |key: &str| raw.get_or_na(key).to_string();

    DisplayOverviewRecord {
        company_name: text("Name"),
        full_name: text("Name"),
        sector: text("Sector"),
        industry: text("Industry"),
        country: text("Country"),
        description: text("Description"),
        market_capitalization: format_large_number(raw.get_or_na("MarketCapitalization")),
        dividend_yield: format_percentage(raw.get_or_na("DividendYield")),
        week_52_high: add_dollar_sign(raw.get_or_na("52WeekHigh")),
        week_52_low: add_dollar_sign(raw.get_or_na("52WeekLow")),
        financial_currency: text("Currency"),
        exchange: text("Exchange"),
    }
}
