// Library exports for stock-insights

pub mod error;

// Alpha Vantage API integration modules
pub mod alphavantage; // Alpha Vantage API client
pub mod config; // Configuration management

pub mod report; // Overview formatting and page rendering
pub mod session; // Current ticker / display record slot

pub mod transport; // Terminal and web front ends
