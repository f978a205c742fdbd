//! Application events
//!
//! Everything the UI loop reacts to arrives on one channel: terminal
//! input forwarded from a reader thread, and results of network tasks.
//! Network events carry per-record outcomes keyed by record id; errors
//! are already flattened to display strings by the task that caught them.

use crossterm::event::KeyEvent;
use shared::{CryptoKey, ScoredLogsPage};

/// Outcome of one per-record score fetch.
pub type ScoreOutcome = (String, Result<f64, String>);

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal key press
    Input(KeyEvent),

    // ========== Inventory page ==========
    /// Key list resolved (phase one of the inventory load)
    InventoryKeys(Result<Vec<CryptoKey>, String>),
    /// Whole scoring batch resolved (phase two)
    InventoryScores(Vec<ScoreOutcome>),
    /// Analyst-triggered action fetch resolved for one key
    InventoryAction {
        key_id: String,
        result: Result<String, String>,
    },

    // ========== Home page ==========
    HomeKeys(Result<Vec<CryptoKey>, String>),
    HomeScores(Vec<ScoreOutcome>),

    // ========== Access logs page ==========
    /// One page of scored logs resolved
    LogsPage(Result<ScoredLogsPage, String>),
    /// Analyst-triggered action fetch resolved for one log entry
    LogsAction {
        log_id: String,
        result: Result<String, String>,
    },
}
