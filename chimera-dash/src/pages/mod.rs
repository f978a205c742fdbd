//! Page state machines
//!
//! Each page owns a record list, a load state, and a cursor. Pages never
//! talk to the network directly: they spawn tasks that report back as
//! `AppEvent`s, and merge those events into their state between frames.
//! Records are rebuilt on every (re)load; nothing is cached across
//! navigations.

pub mod access_logs;
pub mod home;
pub mod inventory;

pub use access_logs::{AccessLogsPage, SortBy};
pub use home::HomePage;
pub use inventory::InventoryPage;

use shared::{CryptoKey, LogEntryWithScore, RecommendedAction, ScoreCell};

/// Page load lifecycle: idle until first shown, then loading, then either
/// loaded or failed with a generic message.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Per-record recommended-action cell. `Resolved` and `Error` are
/// terminal: the action is never re-fetched for that record.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionCell {
    Loading,
    Error,
    Resolved(RecommendedAction),
}

impl ActionCell {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn label(&self) -> String {
        match self {
            Self::Loading => "Loading...".to_string(),
            Self::Error => "Error".to_string(),
            Self::Resolved(action) => action.to_string(),
        }
    }
}

/// Inventory/Home row: a key plus its enrichment state.
#[derive(Debug, Clone)]
pub struct KeyRow {
    pub key: CryptoKey,
    pub score: ScoreCell,
    pub action: Option<ActionCell>,
}

impl KeyRow {
    pub fn new(key: CryptoKey) -> Self {
        Self {
            key,
            score: ScoreCell::Pending,
            action: None,
        }
    }
}

/// Access-log row: the scored wire entry plus its action cell.
#[derive(Debug, Clone)]
pub struct LogRow {
    pub log: LogEntryWithScore,
    pub action: Option<ActionCell>,
}

impl LogRow {
    pub fn new(log: LogEntryWithScore) -> Self {
        Self { log, action: None }
    }
}

/// Apply a batch of score outcomes to key rows, matching by key id.
/// A failed fetch downgrades only its own row; ids with no matching row
/// (stale batch after a reload) are dropped.
pub fn merge_scores(rows: &mut [KeyRow], outcomes: &[(String, Result<f64, String>)]) {
    for (key_id, outcome) in outcomes {
        if let Some(row) = rows.iter_mut().find(|r| r.key.key_id == *key_id) {
            row.score = match outcome {
                Ok(score) => ScoreCell::Value(*score),
                Err(_) => ScoreCell::Error,
            };
        }
    }
}

/// Move a cursor within `len` rows. Saturates at both ends.
pub fn move_cursor(cursor: &mut usize, len: usize, delta: isize) {
    if len == 0 {
        *cursor = 0;
        return;
    }
    let max = len - 1;
    *cursor = if delta < 0 {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        (*cursor + delta as usize).min(max)
    }
    .min(max);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str) -> KeyRow {
        KeyRow::new(CryptoKey {
            key_id: id.into(),
            creation_date: "2024-01-01T00:00:00Z".into(),
            algorithm: "AES_256".into(),
            is_hsm_backed: true,
            rotation_enabled: true,
            permission_policy: "{}".into(),
        })
    }

    #[test]
    fn merge_isolates_per_key_failures() {
        let mut rows = vec![row("key-a"), row("key-b"), row("key-c")];
        merge_scores(
            &mut rows,
            &[
                ("key-a".into(), Ok(12.0)),
                ("key-b".into(), Err("boom".into())),
                ("key-c".into(), Ok(88.0)),
            ],
        );
        assert_eq!(rows[0].score, ScoreCell::Value(12.0));
        assert_eq!(rows[1].score, ScoreCell::Error);
        assert_eq!(rows[2].score, ScoreCell::Value(88.0));
    }

    #[test]
    fn stale_outcomes_are_dropped() {
        let mut rows = vec![row("key-a")];
        merge_scores(&mut rows, &[("key-gone".into(), Ok(50.0))]);
        assert_eq!(rows[0].score, ScoreCell::Pending);
    }

    #[test]
    fn cursor_saturates() {
        let mut cursor = 0;
        move_cursor(&mut cursor, 3, -1);
        assert_eq!(cursor, 0);
        move_cursor(&mut cursor, 3, 5);
        assert_eq!(cursor, 2);
        move_cursor(&mut cursor, 0, 1);
        assert_eq!(cursor, 0);
    }

    #[test]
    fn action_cells_terminal_states() {
        assert!(!ActionCell::Loading.is_terminal());
        assert!(ActionCell::Error.is_terminal());
        assert!(ActionCell::Resolved(RecommendedAction::NoOp).is_terminal());
        assert_eq!(ActionCell::Loading.label(), "Loading...");
        assert_eq!(ActionCell::Error.label(), "Error");
    }
}
