//! Score cell states
//!
//! A record's risk score passes through several display states while the
//! dashboard enriches it: pending right after the record list loads,
//! loading while an analyst-triggered call is in flight, error when that
//! record's fetch failed, or the resolved numeric value.

use serde::{Deserialize, Serialize};

/// Per-record score state.
///
/// Only `Value` is actionable: every other state disables the Analyze
/// action for that record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ScoreCell {
    /// Record rendered, score fetch not yet resolved
    #[default]
    Pending,
    /// An analyst-triggered fetch is in flight
    Loading,
    /// The fetch for this record failed; siblings are unaffected
    Error,
    /// Resolved score
    Value(f64),
}

impl ScoreCell {
    /// The resolved score, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether this cell holds a resolved score an action can be derived from.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl From<Option<f64>> for ScoreCell {
    fn from(score: Option<f64>) -> Self {
        match score {
            Some(v) => Self::Value(v),
            None => Self::Pending,
        }
    }
}

impl std::fmt::Display for ScoreCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "..."),
            Self::Loading => write!(f, "Loading..."),
            Self::Error => write!(f, "Error"),
            Self::Value(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_strings() {
        assert_eq!(ScoreCell::Pending.to_string(), "...");
        assert_eq!(ScoreCell::Loading.to_string(), "Loading...");
        assert_eq!(ScoreCell::Error.to_string(), "Error");
        assert_eq!(ScoreCell::Value(42.0).to_string(), "42");
    }

    #[test]
    fn only_values_are_actionable() {
        assert!(ScoreCell::Value(0.0).is_actionable());
        assert!(!ScoreCell::Pending.is_actionable());
        assert!(!ScoreCell::Loading.is_actionable());
        assert!(!ScoreCell::Error.is_actionable());
    }

    #[test]
    fn from_optional_wire_score() {
        assert_eq!(ScoreCell::from(Some(7.0)), ScoreCell::Value(7.0));
        assert_eq!(ScoreCell::from(None), ScoreCell::Pending);
    }
}
