//! Shared types for Project Chimera
//!
//! Common types used across the client, mock server, and dashboard:
//! data models, scoring API DTOs, risk bands, and the remediation
//! action vocabulary.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{
    ActionResponse, KeyInventoryResponse, RiskInput, ScoredLogsPage, VulnerabilityResponse,
};
pub use models::{
    ActionSeverity, CryptoKey, LogEntry, LogEntryWithScore, RecommendedAction, RiskBand, ScoreCell,
};
