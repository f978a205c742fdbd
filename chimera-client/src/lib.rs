//! Chimera Client - HTTP client for the scoring API
//!
//! Wraps the four scoring-API calls (key inventory, vulnerability
//! prediction, scored logs, action recommendation) and normalizes
//! their error conditions.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{
    ActionResponse, CryptoKey, KeyInventoryResponse, LogEntryWithScore, RiskInput, ScoredLogsPage,
};
