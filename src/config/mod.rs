//! Configuration Management
//!
//! Loads provider and web-server settings from environment variables.

pub mod credentials;
pub mod provider;

#[cfg(feature = "http_transport")]
pub mod http;

// Re-export
pub use credentials::SecretString;
pub use provider::ProviderConfig;

#[cfg(feature = "http_transport")]
pub use http::HttpConfig;
