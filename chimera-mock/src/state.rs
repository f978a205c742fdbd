//! Mock server state

use chrono::{DateTime, Duration, Utc};
use shared::CryptoKey;

const WILDCARD_POLICY: &str = r#"{"Principal":{"AWS":"*"},"Action":"kms:*"}"#;
const SCOPED_POLICY: &str =
    r#"{"Principal":{"AWS":"arn:aws:iam::12345:role/specific-role"},"Action":"kms:Encrypt"}"#;

/// Shared state: the fixed key inventory plus the parameters of the
/// deterministic log stream.
#[derive(Debug, Clone)]
pub struct AppState {
    pub keys: Vec<CryptoKey>,
    /// Total synthetic log entries backing /logs/scored
    pub total_logs: usize,
    /// Seed for the log generator; same seed, same stream
    pub seed: u64,
    /// Fixed "now" so ages and timestamps are stable across requests
    pub now: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            keys: seed_inventory(now),
            total_logs: 240,
            seed: 0x51AE_D7DE,
            now,
        }
    }

    /// Smaller state for tests: fewer logs, fixed seed.
    pub fn with_total_logs(mut self, total_logs: usize) -> Self {
        self.total_logs = total_logs;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// A representative key inventory: every algorithm in the corpus, both
/// policy shapes, and a spread of ages so each risk band is populated.
fn seed_inventory(now: DateTime<Utc>) -> Vec<CryptoKey> {
    let key = |id: &str, days_old: i64, algorithm: &str, hsm: bool, rotation: bool, policy: &str| {
        CryptoKey {
            key_id: id.to_string(),
            creation_date: (now - Duration::days(days_old)).to_rfc3339(),
            algorithm: algorithm.to_string(),
            is_hsm_backed: hsm,
            rotation_enabled: rotation,
            permission_policy: policy.to_string(),
        }
    };

    vec![
        key("key-new-001", 30, "AES_256", true, true, SCOPED_POLICY),
        key("key-new-002", 200, "AES_256", true, true, SCOPED_POLICY),
        key("key-new-003", 400, "RSA_4096", true, false, SCOPED_POLICY),
        key("key-new-004", 500, "AES_256", false, true, WILDCARD_POLICY),
        key("key-new-005", 800, "RSA_2048", false, false, SCOPED_POLICY),
        key("key-new-006", 900, "AES_256", false, true, SCOPED_POLICY),
        key("key-new-007", 1100, "3DES", false, false, WILDCARD_POLICY),
        key("key-new-008", 1500, "RSA_2048", true, false, SCOPED_POLICY),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_is_stable_and_unique() {
        let state = AppState::new();
        assert_eq!(state.keys.len(), 8);
        let mut ids: Vec<_> = state.keys.iter().map(|k| k.key_id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), state.keys.len());
    }
}
