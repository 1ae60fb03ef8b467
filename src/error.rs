use thiserror::Error;

/// Message shown to the user for every failed overview fetch.
///
/// Transport failures, non-200 statuses and unknown tickers all collapse to
/// this one line; the `FetchError` variant is only used for logging.
pub const FETCH_FAILURE_MESSAGE: &str = "Invalid ticker or data unavailable!";

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Initialization error: {0}")]
    Initialization(String),
}

/// Failure to obtain an overview record from the data provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Connection error: {0}")]
    Transport(String),

    #[error("Provider returned HTTP {0}")]
    Status(u16),

    #[error("Response has no Symbol field")]
    MissingSymbol,

    #[error("Parse error: {0}")]
    Parse(String),
}

impl FetchError {
    /// User-facing banner text. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILURE_MESSAGE
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Status(_) => "status",
            FetchError::MissingSymbol => "missing_symbol",
            FetchError::Parse(_) => "parse",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Transport("Request to Alpha Vantage timed out".to_string())
        } else if err.is_connect() {
            FetchError::Transport("Failed to connect to Alpha Vantage".to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(format!("JSON parsing failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, InsightsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fetch_error_has_same_user_message() {
        let errors = [
            FetchError::Transport("refused".to_string()),
            FetchError::Status(404),
            FetchError::MissingSymbol,
            FetchError::Parse("eof".to_string()),
        ];

        for err in &errors {
            assert_eq!(err.user_message(), "Invalid ticker or data unavailable!");
        }
    }

    #[test]
    fn test_error_type_distinguishes_variants() {
        assert_eq!(FetchError::Status(500).error_type(), "status");
        assert_eq!(FetchError::MissingSymbol.error_type(), "missing_symbol");
        assert_eq!(FetchError::Status(404).to_string(), "Provider returned HTTP 404");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FetchError::from(json_err);
        assert!(matches!(err, FetchError::Parse(ref msg) if msg.starts_with("JSON parsing failed")));
    }
}
