//! Deterministic synthetic access-log stream
//!
//! Entry `i` of the stream is a pure function of `(seed, i)`, so paging
//! is stable across requests and across server restarts with the same
//! seed. Index 0 is the newest entry; the stream is reverse chronological
//! like the real log store.

use chrono::Duration;
use rand::{Rng, SeedableRng, rngs::StdRng};
use shared::{LogEntry, LogEntryWithScore, ScoredLogsPage};

use crate::state::AppState;

const APP_SERVER: &str = "arn:aws:iam::12345:role/app-server-prod";
const DATA_PIPELINE: &str = "arn:aws:iam::12345:role/data-pipeline-etl";
const SECURITY_ADMIN: &str = "arn:aws:iam::12345:user/security-admin";

const USER_AGENT_SDK: &str = "aws-sdk-py/1.28.58";
const USER_AGENT_CLI: &str = "aws-cli/2.13.1";

/// One page of the stream, with the same page math as the real backend:
/// `total_pages = ceil(total / limit)`, pages past the end come back empty.
pub fn page(state: &AppState, page: u32, limit: u32) -> ScoredLogsPage {
    let page = page.max(1);
    let limit = limit.max(1) as usize;
    let total_pages = state.total_logs.div_ceil(limit) as u32;

    let start = (page as usize - 1) * limit;
    let end = (start + limit).min(state.total_logs);
    let logs = if start >= state.total_logs {
        Vec::new()
    } else {
        (start..end).map(|i| entry(state, i)).collect()
    };

    ScoredLogsPage {
        logs,
        total_pages,
        current_page: page,
    }
}

/// Generate entry `i` of the stream.
fn entry(state: &AppState, index: usize) -> LogEntryWithScore {
    let mut rng = StdRng::seed_from_u64(state.seed.wrapping_add(index as u64));
    let timestamp = state.now - Duration::seconds(47 * index as i64);

    // ~5% of entries are anomalous, decided by the entry's own rng
    let anomalous = rng.gen_ratio(1, 20);

    let (user_id, source_ip, action, status, user_agent) = if anomalous {
        match rng.gen_range(0..4u8) {
            // Known role calling in from an unknown public address
            0 => (
                APP_SERVER,
                format!("203.0.113.{}", rng.gen_range(1..=254)),
                "Decrypt",
                "Success",
                USER_AGENT_SDK,
            ),
            // Role performing an operation outside its profile
            1 => (APP_SERVER, "52.95.110.1".to_string(), "Decrypt", "Success", USER_AGENT_SDK),
            // Admin activity at an unusual hour (encoded in the score below)
            2 => (
                SECURITY_ADMIN,
                format!("10.0.{}.{}", rng.gen_range(0..8), rng.gen_range(1..=254)),
                "ScheduleKeyDeletion",
                "Success",
                USER_AGENT_CLI,
            ),
            // Repeated failing decrypts
            _ => (
                DATA_PIPELINE,
                "10.0.1.55".to_string(),
                "Decrypt",
                "Failure",
                USER_AGENT_SDK,
            ),
        }
    } else {
        match rng.gen_range(0..3u8) {
            0 => (APP_SERVER, "52.95.110.1".to_string(), "Encrypt", "Success", USER_AGENT_SDK),
            1 => (DATA_PIPELINE, "10.0.1.55".to_string(), "Decrypt", "Success", USER_AGENT_SDK),
            _ => (
                SECURITY_ADMIN,
                format!("10.0.{}.{}", rng.gen_range(0..8), rng.gen_range(1..=254)),
                if rng.gen_bool(0.5) { "DescribeKey" } else { "Encrypt" },
                "Success",
                USER_AGENT_CLI,
            ),
        }
    };

    let entry = LogEntry {
        log_id: format!("log-{:06}", index),
        timestamp: timestamp.to_rfc3339(),
        key_id: format!("key-new-{:03}", rng.gen_range(1..=8)),
        user_id: user_id.to_string(),
        source_ip,
        action: action.to_string(),
        user_agent: user_agent.to_string(),
        status: status.to_string(),
    };

    let anomaly_score = Some(anomaly_score(&entry, &mut rng));

    LogEntryWithScore {
        entry,
        anomaly_score,
        recommended_action: None,
    }
}

/// Anomaly score for an entry, 0..=100 rounded. Feature weights stand in
/// for the detection model.
fn anomaly_score(entry: &LogEntry, rng: &mut StdRng) -> f64 {
    let mut score: f64 = rng.gen_range(3.0..22.0);

    if entry.status == "Failure" {
        score += 45.0;
    }
    if entry.user_id == APP_SERVER && entry.action == "Decrypt" {
        score += 35.0;
    }
    if entry.source_ip.starts_with("203.0.113.") {
        score += 30.0;
    }
    if entry.action == "ScheduleKeyDeletion" {
        score += 55.0;
    }

    score.clamp(0.0, 100.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_is_deterministic() {
        let state = AppState::new();
        let a = page(&state, 2, 50);
        let b = page(&state, 2, 50);
        assert_eq!(a.logs, b.logs);
        assert_eq!(a.total_pages, b.total_pages);
    }

    #[test]
    fn page_math_matches_backend() {
        let state = AppState::new().with_total_logs(120);
        let first = page(&state, 1, 50);
        assert_eq!(first.logs.len(), 50);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.current_page, 1);

        let last = page(&state, 3, 50);
        assert_eq!(last.logs.len(), 20);

        let past_end = page(&state, 4, 50);
        assert!(past_end.logs.is_empty());
        assert_eq!(past_end.total_pages, 3);
        assert_eq!(past_end.current_page, 4);
    }

    #[test]
    fn stream_is_reverse_chronological() {
        let state = AppState::new();
        let p = page(&state, 1, 50);
        let times: Vec<_> = p.logs.iter().map(|l| l.entry.timestamp.clone()).collect();
        let mut sorted = times.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(times, sorted);
    }

    #[test]
    fn every_entry_is_scored() {
        let state = AppState::new();
        let p = page(&state, 1, 50);
        assert!(p.logs.iter().all(|l| l.anomaly_score.is_some()));
        assert!(
            p.logs
                .iter()
                .all(|l| (0.0..=100.0).contains(&l.anomaly_score.unwrap()))
        );
    }
}
