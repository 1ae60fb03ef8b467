//! Front ends for the overview page
//!
//! - Stdio: interactive prompt on the terminal (default)
//! - HTTP: the same page served as an HTML form

#[cfg(feature = "http_transport")]
pub mod http;

pub mod stdio;

/// Front-end selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    /// Interactive terminal session
    #[default]
    Stdio,

    /// Web form served over HTTP
    Http,
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http),
            other => Err(format!("Invalid mode: {}", other)),
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdio => write!(f, "stdio"),
            Self::Http => write!(f, "http"),
        }
    }
}
