//! Data models
//!
//! Shared between the scoring API surface and the dashboard.
//! Wire types are plain serde structs; `ScoreCell`, `RiskBand`, and
//! `RecommendedAction` are the typed renderings of values the API
//! exchanges as raw numbers and strings.

pub mod action;
pub mod key;
pub mod log;
pub mod risk;
pub mod score;

// Re-exports
pub use action::*;
pub use key::*;
pub use log::*;
pub use risk::*;
pub use score::*;
