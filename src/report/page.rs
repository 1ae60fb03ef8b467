// Static page content shared by the terminal and web renderers

pub const PAGE_TITLE: &str = "Stock Insights";

pub const HEADING: &str = "Simply enter a stock ticker to fetch detailed insights";

pub const INPUT_LABEL: &str = "Enter Stock Ticker";
pub const INPUT_PLACEHOLDER: &str = "e.g., AAPL, TSLA, MSFT";
pub const INPUT_HELP: &str = "Enter a stock ticker symbol to fetch detailed insights.";
pub const SUBMIT_LABEL: &str = "Enter";

pub const DISCLAIMER: &str = "This product is for informational purposes only and should not be \
considered financial advice. Please note that past performance is not indicative of future \
results. Investments carry inherent risks, including the potential loss of principal. Consult \
with a qualified financial advisor to assess your individual circumstances before making any \
investment decisions.";

pub const PROCEED_LABEL: &str = "Proceed to layer 3 for insight and prediction for analysis";

pub const HOME_LABEL: &str = "Back to Home";
pub const HOME_URL: &str = "https://icspcw2landingpage.streamlit.app/";

pub const FOOTER: &str = "All rights reserved by Aiden Choi for ICSP © 2025";

/// Header shown above the record
pub fn insights_header(ticker: &str) -> String {
    format!("Essential Insights for {}", ticker)
}
