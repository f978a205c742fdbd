//! Access log models

use serde::{Deserialize, Serialize};

/// A single KMS access log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique log identifier
    pub log_id: String,
    /// Event timestamp (RFC 3339 string)
    pub timestamp: String,
    /// Key the operation targeted (not enforced against the inventory)
    pub key_id: String,
    pub user_id: String,
    pub source_ip: String,
    /// KMS operation, e.g. "Decrypt", "GenerateDataKey"
    pub action: String,
    pub user_agent: String,
    /// Operation outcome, e.g. "SUCCESS", "ACCESS_DENIED"
    pub status: String,
}

/// Log entry as returned by `/logs/scored`: the raw entry plus the
/// anomaly score the detection model attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntryWithScore {
    #[serde(flatten)]
    pub entry: LogEntry,
    /// Anomaly score in 0..=100; absent when the model skipped the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anomaly_score: Option<f64>,
    /// Remediation label, present only once an analyst requested one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_action: Option<String>,
}
