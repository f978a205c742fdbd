//! Access log analysis page
//!
//! Pagination-keyed load: changing the page replaces the whole log list.
//! Sorting is a client-side toggle over the currently loaded page only —
//! Time keeps the API order (reverse chronological), Score sorts by
//! anomaly score descending with missing scores below any present score.

use chimera_client::HttpClient;
use shared::{RecommendedAction, RiskInput, ScoredLogsPage};
use tokio::sync::mpsc::UnboundedSender;

use crate::events::AppEvent;

use super::{ActionCell, LoadState, LogRow, move_cursor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Time,
    Score,
}

impl SortBy {
    pub fn toggled(self) -> Self {
        match self {
            Self::Time => Self::Score,
            Self::Score => Self::Time,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::Score => "Score",
        }
    }
}

#[derive(Debug, Default)]
pub struct AccessLogsPage {
    pub rows: Vec<LogRow>,
    pub load: LoadState,
    pub sort_by: SortBy,
    pub current_page: u32,
    pub total_pages: u32,
    pub cursor: usize,
}

impl AccessLogsPage {
    /// Reset to page 1 and start a fresh load.
    pub fn reload(&mut self, client: &HttpClient, tx: &UnboundedSender<AppEvent>) {
        self.current_page = 1;
        self.fetch_page(client, tx);
    }

    /// Go to the next page. Gated until the last known page is reached.
    pub fn next_page(&mut self, client: &HttpClient, tx: &UnboundedSender<AppEvent>) {
        if self.load.is_loading() || self.current_page >= self.total_pages {
            return;
        }
        self.current_page += 1;
        self.fetch_page(client, tx);
    }

    /// Go to the previous page. Gated at page 1.
    pub fn previous_page(&mut self, client: &HttpClient, tx: &UnboundedSender<AppEvent>) {
        if self.load.is_loading() || self.current_page <= 1 {
            return;
        }
        self.current_page -= 1;
        self.fetch_page(client, tx);
    }

    fn fetch_page(&mut self, client: &HttpClient, tx: &UnboundedSender<AppEvent>) {
        self.rows.clear();
        self.cursor = 0;
        self.load = LoadState::Loading;

        let page = self.current_page.max(1);
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = client.scored_logs(page).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::LogsPage(result));
        });
    }

    pub fn on_page(&mut self, result: Result<ScoredLogsPage, String>) {
        match result {
            Ok(page) => {
                self.rows = page.logs.into_iter().map(LogRow::new).collect();
                self.current_page = page.current_page;
                self.total_pages = page.total_pages;
                self.load = LoadState::Loaded;
            }
            Err(message) => {
                tracing::warn!("scored logs load failed: {}", message);
                self.load = LoadState::Failed(message);
            }
        }
    }

    pub fn on_action(&mut self, log_id: &str, result: Result<String, String>) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.log.entry.log_id == log_id) {
            row.action = Some(match result {
                Ok(label) => ActionCell::Resolved(RecommendedAction::parse(&label)),
                Err(_) => ActionCell::Error,
            });
        }
    }

    pub fn toggle_sort(&mut self) {
        self.sort_by = self.sort_by.toggled();
        self.cursor = 0;
    }

    pub fn move_cursor(&mut self, delta: isize) {
        move_cursor(&mut self.cursor, self.rows.len(), delta);
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Display order of `rows` under the active sort. Indices into `rows`;
    /// the underlying list always stays in API order.
    pub fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        if self.sort_by == SortBy::Score {
            order.sort_by(|&a, &b| {
                let score = |i: usize| self.rows[i].log.anomaly_score.unwrap_or(-1.0);
                score(b).partial_cmp(&score(a)).unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        order
    }

    /// The row currently under the cursor, honoring the display order.
    pub fn selected_row_index(&self) -> Option<usize> {
        self.display_order().get(self.cursor).copied()
    }

    /// Request a recommended action for the selected row, keyed on its
    /// anomaly score. Same gating as the inventory page.
    pub fn analyze_selected(&mut self, client: &HttpClient, tx: &UnboundedSender<AppEvent>) {
        let Some(index) = self.selected_row_index() else {
            return;
        };
        let row = &mut self.rows[index];
        let Some(score) = row.log.anomaly_score else {
            return;
        };
        if row.action.is_some() {
            return;
        }

        row.action = Some(ActionCell::Loading);
        let log_id = row.log.entry.log_id.clone();
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = client
                .recommended_action(RiskInput::anomaly(score))
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::LogsAction { log_id, result });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{LogEntry, LogEntryWithScore};

    fn scored_log(id: &str, score: Option<f64>) -> LogEntryWithScore {
        LogEntryWithScore {
            entry: LogEntry {
                log_id: id.into(),
                timestamp: "2024-01-01T00:00:00Z".into(),
                key_id: "key-new-001".into(),
                user_id: "arn:aws:iam::12345:role/app-server-prod".into(),
                source_ip: "52.95.110.1".into(),
                action: "Encrypt".into(),
                user_agent: "aws-sdk-py/1.28.58".into(),
                status: "Success".into(),
            },
            anomaly_score: score,
            recommended_action: None,
        }
    }

    fn loaded_page(scores: &[Option<f64>]) -> AccessLogsPage {
        let mut page = AccessLogsPage::default();
        page.on_page(Ok(ScoredLogsPage {
            logs: scores
                .iter()
                .enumerate()
                .map(|(i, s)| scored_log(&format!("log-{:06}", i), *s))
                .collect(),
            total_pages: 5,
            current_page: 2,
        }));
        page
    }

    #[test]
    fn score_sort_is_non_increasing_with_missing_last() {
        let mut page = loaded_page(&[Some(10.0), None, Some(90.0), Some(55.0), None]);
        page.toggle_sort();
        assert_eq!(page.sort_by, SortBy::Score);

        let order = page.display_order();
        let scores: Vec<f64> = order
            .iter()
            .map(|&i| page.rows[i].log.anomaly_score.unwrap_or(-1.0))
            .collect();
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1], "sequence increased: {:?}", scores);
        }
        // both unscored entries sort below every scored one
        assert!(order[3..].iter().all(|&i| page.rows[i].log.anomaly_score.is_none()));
    }

    #[test]
    fn time_sort_keeps_api_order() {
        let page = loaded_page(&[Some(10.0), Some(90.0), Some(55.0)]);
        assert_eq!(page.display_order(), vec![0, 1, 2]);
    }

    #[test]
    fn pagination_gating_at_both_ends() {
        let page = loaded_page(&[Some(10.0)]);
        assert!(page.has_next());
        assert!(page.has_previous());

        let mut first = loaded_page(&[]);
        first.current_page = 1;
        assert!(!first.has_previous());

        let mut last = loaded_page(&[]);
        last.current_page = 5;
        assert!(!last.has_next());
    }

    #[tokio::test]
    async fn page_change_replaces_the_list() {
        let client = chimera_client::ClientConfig::default().build_http_client();
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();

        let mut page = loaded_page(&[Some(10.0), Some(20.0)]);
        assert_eq!(page.rows.len(), 2);
        page.next_page(&client, &tx);

        assert!(page.rows.is_empty());
        assert!(page.load.is_loading());
        assert_eq!(page.current_page, 3);
    }

    #[tokio::test]
    async fn analyze_is_keyed_on_the_displayed_row() {
        let client = chimera_client::ClientConfig::default().build_http_client();
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel::<AppEvent>();

        let mut page = loaded_page(&[Some(10.0), Some(90.0), None]);
        page.toggle_sort();

        // Cursor 0 under score sort is the 90.0 entry (rows[1])
        page.analyze_selected(&client, &tx);
        assert_eq!(page.rows[1].action, Some(ActionCell::Loading));
        assert_eq!(page.rows[0].action, None);

        // Unscored rows cannot be analyzed
        page.cursor = 2;
        page.analyze_selected(&client, &tx);
        assert_eq!(page.rows[2].action, None);
    }
}
