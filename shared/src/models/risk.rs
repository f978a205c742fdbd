//! Risk band classification

use serde::{Deserialize, Serialize};

use super::ScoreCell;

/// Fixed four-band bucketing of a 0..=100 risk score.
///
/// Comparisons are strictly greater-than: a score of exactly 75 is High,
/// 50 is Medium, 25 is Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskBand {
    /// All bands, lowest first. Chart legends iterate this.
    pub const ALL: [RiskBand; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Classify a numeric score.
    pub fn classify(score: f64) -> Self {
        if score > 75.0 {
            Self::Critical
        } else if score > 50.0 {
            Self::High
        } else if score > 25.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Classify a score cell. Unresolved cells count as Low, matching the
    /// chart's treatment of records that errored or are still loading.
    pub fn classify_cell(cell: ScoreCell) -> Self {
        Self::classify(cell.value().unwrap_or(0.0))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_interior_scores() {
        assert_eq!(RiskBand::classify(80.0), RiskBand::Critical);
        assert_eq!(RiskBand::classify(60.0), RiskBand::High);
        assert_eq!(RiskBand::classify(30.0), RiskBand::Medium);
        assert_eq!(RiskBand::classify(10.0), RiskBand::Low);
    }

    #[test]
    fn boundaries_resolve_to_lower_band() {
        assert_eq!(RiskBand::classify(75.0), RiskBand::High);
        assert_eq!(RiskBand::classify(50.0), RiskBand::Medium);
        assert_eq!(RiskBand::classify(25.0), RiskBand::Low);
    }

    #[test]
    fn unresolved_cells_are_low() {
        assert_eq!(RiskBand::classify_cell(ScoreCell::Pending), RiskBand::Low);
        assert_eq!(RiskBand::classify_cell(ScoreCell::Error), RiskBand::Low);
        assert_eq!(
            RiskBand::classify_cell(ScoreCell::Value(90.0)),
            RiskBand::Critical
        );
    }
}
