//! Scoring API DTOs
//!
//! Request/response types for the four scoring endpoints, shared between
//! chimera-client and chimera-mock so both sides agree on the wire shape.

use serde::{Deserialize, Serialize};

use crate::models::{CryptoKey, LogEntryWithScore};

/// Response body of `GET /keys/inventory`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyInventoryResponse {
    pub keys: Vec<CryptoKey>,
}

/// Response body of `POST /predict_vulnerability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnerabilityResponse {
    pub predicted_vulnerability_score: f64,
}

/// One page of `GET /logs/scored`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredLogsPage {
    pub logs: Vec<LogEntryWithScore>,
    pub total_pages: u32,
    pub current_page: u32,
}

impl ScoredLogsPage {
    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// Request body of `POST /get_action`.
///
/// The policy endpoint accepts exactly one of the two score fields; the
/// enum makes sending both (or neither) unrepresentable. Serialization is
/// untagged, so the wire form is `{"vulnerability_score": 80.0}` or
/// `{"anomaly_score": 12.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskInput {
    Vulnerability { vulnerability_score: f64 },
    Anomaly { anomaly_score: f64 },
}

impl RiskInput {
    pub fn vulnerability(score: f64) -> Self {
        Self::Vulnerability {
            vulnerability_score: score,
        }
    }

    pub fn anomaly(score: f64) -> Self {
        Self::Anomaly {
            anomaly_score: score,
        }
    }

    /// The score value, whichever kind it is.
    pub fn score(&self) -> f64 {
        match self {
            Self::Vulnerability {
                vulnerability_score,
            } => *vulnerability_score,
            Self::Anomaly { anomaly_score } => *anomaly_score,
        }
    }
}

/// Response body of `POST /get_action`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub recommended_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_input_sends_exactly_one_field() {
        let v = serde_json::to_value(RiskInput::vulnerability(80.0)).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["vulnerability_score"], 80.0);

        let v = serde_json::to_value(RiskInput::anomaly(12.5)).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["anomaly_score"], 12.5);
    }

    #[test]
    fn risk_input_deserializes_by_field_name() {
        let v: RiskInput = serde_json::from_str(r#"{"vulnerability_score": 66}"#).unwrap();
        assert_eq!(v, RiskInput::vulnerability(66.0));
        let a: RiskInput = serde_json::from_str(r#"{"anomaly_score": 3}"#).unwrap();
        assert_eq!(a, RiskInput::anomaly(3.0));
    }

    #[test]
    fn page_navigation_gating() {
        let page = ScoredLogsPage {
            logs: vec![],
            total_pages: 3,
            current_page: 1,
        };
        assert!(page.has_next());
        assert!(!page.has_previous());

        let last = ScoredLogsPage {
            logs: vec![],
            total_pages: 3,
            current_page: 3,
        };
        assert!(!last.has_next());
        assert!(last.has_previous());
    }
}
