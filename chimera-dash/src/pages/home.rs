//! Home page
//!
//! Aggregate view: fetches the inventory, scores every key concurrently
//! (same batch pattern as the inventory page), and derives the KPIs and
//! risk-distribution chart as pure reductions over the scored list.

use chimera_client::HttpClient;
use futures::future::join_all;
use shared::{CryptoKey, RiskBand, ScoreCell};
use tokio::sync::mpsc::UnboundedSender;

use crate::events::{AppEvent, ScoreOutcome};

use super::{KeyRow, LoadState, merge_scores};

#[derive(Debug, Default)]
pub struct HomePage {
    pub rows: Vec<KeyRow>,
    pub load: LoadState,
}

impl HomePage {
    /// Reset and start a fresh load. Called on startup and on tab entry.
    pub fn reload(&mut self, client: &HttpClient, tx: &UnboundedSender<AppEvent>) {
        self.rows.clear();
        self.load = LoadState::Loading;

        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let keys = match client.key_inventory().await {
                Ok(keys) => keys,
                Err(e) => {
                    tracing::warn!("home load failed: {}", e);
                    let _ = tx.send(AppEvent::HomeKeys(Err(e.to_string())));
                    return;
                }
            };
            let _ = tx.send(AppEvent::HomeKeys(Ok(keys.clone())));

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
            let _ = tx.send(AppEvent::HomeScores(outcomes));
        });
    }

    pub fn on_keys(&mut self, result: Result<Vec<CryptoKey>, String>) {
        match result {
            Ok(keys) => {
                self.rows = keys.into_iter().map(KeyRow::new).collect();
                self.load = LoadState::Loaded;
            }
            Err(message) => self.load = LoadState::Failed(message),
        }
    }

    pub fn on_scores(&mut self, outcomes: Vec<ScoreOutcome>) {
        merge_scores(&mut self.rows, &outcomes);
    }

    // ========== KPIs ==========

    /// Total keys monitored.
    pub fn total_keys(&self) -> usize {
        self.rows.len()
    }

    /// Keys whose resolved score is strictly above 50.
    pub fn high_risk_keys(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.score.value().is_some_and(|s| s > 50.0))
            .count()
    }

    /// Key count per risk band, lowest band first. Unresolved scores
    /// count as Low, matching the chart in the source dashboard.
    pub fn band_counts(&self) -> [(RiskBand, u64); 4] {
        let mut counts = RiskBand::ALL.map(|band| (band, 0u64));
        for row in &self.rows {
            let band = RiskBand::classify_cell(row.score);
            if let Some(slot) = counts.iter_mut().find(|(b, _)| *b == band) {
                slot.1 += 1;
            }
        }
        counts
    }

    /// Whether any score is still unresolved (chart renders a hint).
    pub fn scoring_in_progress(&self) -> bool {
        self.rows.iter().any(|r| r.score == ScoreCell::Pending)
    }
}
