//! Heuristic scorers and the action policy
//!
//! Fixed rule weights in place of the trained models. Scores are clamped
//! to 0..=100 and rounded, matching what the real backend emits.

use chrono::{DateTime, Utc};
use shared::{CryptoKey, RecommendedAction, RiskInput};

/// Vulnerability score for a key configuration.
///
/// Weights: age over two years 20 (over one year 10), weak algorithm 30,
/// software-held material 15, rotation disabled 15, wildcard principal 40.
pub fn vulnerability_score(key: &CryptoKey, now: DateTime<Utc>) -> f64 {
    let mut score: f64 = 0.0;

    let age_days = DateTime::parse_from_rfc3339(&key.creation_date)
        .map(|created| (now - created.with_timezone(&Utc)).num_days())
        .unwrap_or(0);
    if age_days > 730 {
        score += 20.0;
    } else if age_days > 365 {
        score += 10.0;
    }

    if matches!(key.algorithm.as_str(), "RSA_2048" | "3DES") {
        score += 30.0;
    }
    if !key.is_hsm_backed {
        score += 15.0;
    }
    if !key.rotation_enabled {
        score += 15.0;
    }
    if key.permission_policy.contains(r#""AWS":"*""#) {
        score += 40.0;
    }

    score.clamp(0.0, 100.0).round()
}

/// Remediation policy: score bands map to the closed action vocabulary.
/// Static risk (vulnerability) is mitigated by rotation or quarantine,
/// dynamic risk (anomaly) by permission restriction.
pub fn recommend(input: RiskInput) -> RecommendedAction {
    match input {
        RiskInput::Vulnerability {
            vulnerability_score,
        } => {
            if vulnerability_score > 75.0 {
                RecommendedAction::QuarantineKey
            } else if vulnerability_score > 50.0 {
                RecommendedAction::ForceRotateKey
            } else if vulnerability_score > 25.0 {
                RecommendedAction::AlertSoc
            } else {
                RecommendedAction::NoOp
            }
        }
        RiskInput::Anomaly { anomaly_score } => {
            if anomaly_score > 75.0 {
                RecommendedAction::RestrictPermissions
            } else if anomaly_score > 50.0 {
                RecommendedAction::AlertSoc
            } else {
                RecommendedAction::NoOp
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shared::CryptoKey;

    fn key(days_old: i64, algorithm: &str, hsm: bool, rotation: bool, policy: &str) -> CryptoKey {
        let now = Utc::now();
        CryptoKey {
            key_id: "key-test".into(),
            creation_date: (now - Duration::days(days_old)).to_rfc3339(),
            algorithm: algorithm.into(),
            is_hsm_backed: hsm,
            rotation_enabled: rotation,
            permission_policy: policy.into(),
        }
    }

    #[test]
    fn hardened_key_scores_zero() {
        let k = key(30, "AES_256", true, true, r#"{"Principal":{"AWS":"arn"}}"#);
        assert_eq!(vulnerability_score(&k, Utc::now()), 0.0);
    }

    #[test]
    fn worst_case_key_is_clamped() {
        let k = key(2000, "3DES", false, false, r#"{"Principal":{"AWS":"*"}}"#);
        assert_eq!(vulnerability_score(&k, Utc::now()), 100.0);
    }

    #[test]
    fn policy_bands() {
        assert_eq!(
            recommend(RiskInput::vulnerability(80.0)),
            RecommendedAction::QuarantineKey
        );
        assert_eq!(
            recommend(RiskInput::vulnerability(60.0)),
            RecommendedAction::ForceRotateKey
        );
        assert_eq!(
            recommend(RiskInput::vulnerability(30.0)),
            RecommendedAction::AlertSoc
        );
        assert_eq!(
            recommend(RiskInput::vulnerability(10.0)),
            RecommendedAction::NoOp
        );
        assert_eq!(
            recommend(RiskInput::anomaly(90.0)),
            RecommendedAction::RestrictPermissions
        );
        assert_eq!(recommend(RiskInput::anomaly(60.0)), RecommendedAction::AlertSoc);
        assert_eq!(recommend(RiskInput::anomaly(5.0)), RecommendedAction::NoOp);
    }
}
