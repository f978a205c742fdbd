//! Key inventory page
//!
//! Two-phase load: the key list renders as soon as it arrives, every key
//! is then scored concurrently (all requests in flight at once) and the
//! whole batch merges in a single update. The Analyze action is manual,
//! per row, and gated on the row holding a numeric score.

use chimera_client::HttpClient;
use futures::future::join_all;
use shared::{CryptoKey, RecommendedAction, RiskInput};
use tokio::sync::mpsc::UnboundedSender;

use crate::events::{AppEvent, ScoreOutcome};

use super::{ActionCell, KeyRow, LoadState, merge_scores, move_cursor};

#[derive(Debug, Default)]
pub struct InventoryPage {
    pub rows: Vec<KeyRow>,
    pub load: LoadState,
    pub cursor: usize,
}

impl InventoryPage {
    /// Reset and start a fresh load. Called every time the tab is entered.
    pub fn reload(&mut self, client: &HttpClient, tx: &UnboundedSender<AppEvent>) {
        self.rows.clear();
        self.cursor = 0;
        self.load = LoadState::Loading;
        spawn_load_and_score(client.clone(), tx.clone());
    }

    pub fn on_keys(&mut self, result: Result<Vec<CryptoKey>, String>) {
        match result {
            Ok(keys) => {
                self.rows = keys.into_iter().map(KeyRow::new).collect();
                self.load = LoadState::Loaded;
            }
            Err(message) => {
                self.load = LoadState::Failed(message);
            }
        }
    }

    pub fn on_scores(&mut self, outcomes: Vec<ScoreOutcome>) {
        merge_scores(&mut self.rows, &outcomes);
    }

    pub fn on_action(&mut self, key_id: &str, result: Result<String, String>) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.key.key_id == key_id) {
            row.action = Some(match result {
                Ok(label) => ActionCell::Resolved(RecommendedAction::parse(&label)),
                Err(_) => ActionCell::Error,
            });
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        move_cursor(&mut self.cursor, self.rows.len(), delta);
    }

    /// Request a recommended action for the selected row. No-op unless the
    /// row has a numeric score and no terminal action yet.
    pub fn analyze_selected(&mut self, client: &HttpClient, tx: &UnboundedSender<AppEvent>) {
        let Some(row) = self.rows.get_mut(self.cursor) else {
            return;
        };
        let Some(score) = row.score.value() else {
            return;
        };
        // Loading blocks a duplicate request; Resolved/Error are terminal
        // and never re-fetched.
        if row.action.is_some() {
            return;
        }

        row.action = Some(ActionCell::Loading);
        let key_id = row.key.key_id.clone();
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = client
                .recommended_action(RiskInput::vulnerability(score))
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::InventoryAction { key_id, result });
        });
    }
}

/// Phase one fetches the list; phase two fans out one scoring request per
/// key with no concurrency cap and reports the whole batch at once.
fn spawn_load_and_score(client: HttpClient, tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let keys = match client.key_inventory().await {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!("inventory load failed: {}", e);
                let _ = tx.send(AppEvent::InventoryKeys(Err(e.to_string())));
                return;
            }
        };
        let _ = tx.send(AppEvent::InventoryKeys(Ok(keys.clone())));

        let outcomes = join_all(keys.iter().map(|key| {
            let client = client.clone();
            async move {
                let result = client
                    .predict_vulnerability(key)
                    .await
                    .map_err(|e| e.to_string());
                (key.key_id.clone(), result)
            }
        }))
        .await;
        let _ = tx.send(AppEvent::InventoryScores(outcomes));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ScoreCell;

    fn key(id: &str) -> CryptoKey {
        CryptoKey {
            key_id: id.into(),
            creation_date: "2024-01-01T00:00:00Z".into(),
            algorithm: "AES_256".into(),
            is_hsm_backed: true,
            rotation_enabled: true,
            permission_policy: "{}".into(),
        }
    }

    #[test]
    fn keys_render_before_scores_arrive() {
        let mut page = InventoryPage::default();
        page.load = LoadState::Loading;
        page.on_keys(Ok(vec![key("key-a"), key("key-b")]));

        assert_eq!(page.load, LoadState::Loaded);
        assert_eq!(page.rows.len(), 2);
        assert!(page.rows.iter().all(|r| r.score == ScoreCell::Pending));
    }

    #[test]
    fn list_failure_is_a_page_failure() {
        let mut page = InventoryPage::default();
        page.on_keys(Err("Failed to fetch key inventory from the API.".into()));
        assert!(matches!(page.load, LoadState::Failed(_)));
        assert!(page.rows.is_empty());
    }

    #[test]
    fn batch_merge_keeps_partial_failures_scoped() {
        let mut page = InventoryPage::default();
        page.on_keys(Ok(vec![key("key-a"), key("key-b")]));
        page.on_scores(vec![
            ("key-a".into(), Err("503".into())),
            ("key-b".into(), Ok(61.0)),
        ]);
        assert_eq!(page.rows[0].score, ScoreCell::Error);
        assert_eq!(page.rows[1].score, ScoreCell::Value(61.0));
        assert_eq!(page.load, LoadState::Loaded);
    }

    #[test]
    fn action_resolution_merges_by_key_id() {
        let mut page = InventoryPage::default();
        page.on_keys(Ok(vec![key("key-a"), key("key-b")]));
        page.on_scores(vec![("key-a".into(), Ok(80.0)), ("key-b".into(), Ok(10.0))]);

        page.on_action("key-a", Ok("QUARANTINE_KEY".into()));
        assert_eq!(
            page.rows[0].action,
            Some(ActionCell::Resolved(RecommendedAction::QuarantineKey))
        );
        assert_eq!(page.rows[1].action, None);

        page.on_action("key-b", Err("policy endpoint down".into()));
        assert_eq!(page.rows[1].action, Some(ActionCell::Error));
    }

    #[tokio::test]
    async fn analyze_is_gated_on_numeric_score_and_fresh_cell() {
        let client = chimera_client::ClientConfig::default().build_http_client();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        let mut page = InventoryPage::default();
        page.on_keys(Ok(vec![key("key-a")]));

        // Score still pending: nothing starts
        page.analyze_selected(&client, &tx);
        assert_eq!(page.rows[0].action, None);
        assert!(rx.try_recv().is_err());

        // Terminal action: never re-fetched
        page.on_scores(vec![("key-a".into(), Ok(80.0))]);
        page.rows[0].action = Some(ActionCell::Resolved(RecommendedAction::NoOp));
        page.analyze_selected(&client, &tx);
        assert_eq!(
            page.rows[0].action,
            Some(ActionCell::Resolved(RecommendedAction::NoOp))
        );
    }
}
