//! Remediation action vocabulary

use serde::{Deserialize, Serialize};

/// Closed vocabulary of remediation actions the policy endpoint returns.
///
/// Unrecognized labels are preserved verbatim in `Unknown` so a newer
/// backend never breaks an older dashboard; they just render unstyled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendedAction {
    QuarantineKey,
    ForceRotateKey,
    AlertSoc,
    RestrictPermissions,
    NoOp,
    Unknown(String),
}

/// Badge severity for an action, used only for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSeverity {
    Critical,
    High,
    Medium,
    None,
}

impl RecommendedAction {
    /// Parse a wire label. Never fails; unknown labels are carried through.
    pub fn parse(label: &str) -> Self {
        match label {
            "QUARANTINE_KEY" => Self::QuarantineKey,
            "FORCE_ROTATE_KEY" => Self::ForceRotateKey,
            "ALERT_SOC" => Self::AlertSoc,
            "RESTRICT_PERMISSIONS" => Self::RestrictPermissions,
            "NO_OP" => Self::NoOp,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::QuarantineKey => "QUARANTINE_KEY",
            Self::ForceRotateKey => "FORCE_ROTATE_KEY",
            Self::AlertSoc => "ALERT_SOC",
            Self::RestrictPermissions => "RESTRICT_PERMISSIONS",
            Self::NoOp => "NO_OP",
            Self::Unknown(s) => s,
        }
    }

    /// Badge severity. Unknown actions get no special style.
    pub fn severity(&self) -> ActionSeverity {
        match self {
            Self::QuarantineKey => ActionSeverity::Critical,
            Self::ForceRotateKey | Self::RestrictPermissions => ActionSeverity::High,
            Self::AlertSoc => ActionSeverity::Medium,
            Self::NoOp | Self::Unknown(_) => ActionSeverity::None,
        }
    }
}

impl std::fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_known_labels() {
        for label in [
            "QUARANTINE_KEY",
            "FORCE_ROTATE_KEY",
            "ALERT_SOC",
            "RESTRICT_PERMISSIONS",
            "NO_OP",
        ] {
            let action = RecommendedAction::parse(label);
            assert_eq!(action.as_str(), label);
            assert!(!matches!(action, RecommendedAction::Unknown(_)));
        }
    }

    #[test]
    fn unknown_labels_fall_back_unstyled() {
        let action = RecommendedAction::parse("REVOKE_EVERYTHING");
        assert_eq!(action, RecommendedAction::Unknown("REVOKE_EVERYTHING".into()));
        assert_eq!(action.severity(), ActionSeverity::None);
    }

    #[test]
    fn severity_mapping() {
        assert_eq!(
            RecommendedAction::QuarantineKey.severity(),
            ActionSeverity::Critical
        );
        assert_eq!(
            RecommendedAction::ForceRotateKey.severity(),
            ActionSeverity::High
        );
        assert_eq!(RecommendedAction::AlertSoc.severity(), ActionSeverity::Medium);
        assert_eq!(RecommendedAction::NoOp.severity(), ActionSeverity::None);
    }
}
