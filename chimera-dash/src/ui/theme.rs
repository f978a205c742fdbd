//! Score and action badge palettes
//!
//! Two palettes shipped; which one is active is styling only, the band
//! classification itself lives in `shared::RiskBand`.

use ratatui::style::{Color, Modifier, Style};
use shared::{ActionSeverity, RiskBand, ScoreCell};

/// Named palette choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Green / yellow / orange / red badge colors
    #[default]
    Default,
    /// Muted terminal colors from the earlier dashboard styling
    Classic,
}

impl Palette {
    /// Parse a palette name; anything unrecognized falls back to Default.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Self::Classic,
            _ => Self::Default,
        }
    }
}

/// Resolved style map for the active palette.
#[derive(Debug, Clone)]
pub struct Theme {
    low: Color,
    medium: Color,
    high: Color,
    critical: Color,
}

impl Theme {
    pub fn new(palette: Palette) -> Self {
        match palette {
            Palette::Default => Self {
                low: Color::Rgb(0x3d, 0xd5, 0x6d),
                medium: Color::Rgb(0xfc, 0xe8, 0x3a),
                high: Color::Rgb(0xff, 0xac, 0x33),
                critical: Color::Rgb(0xff, 0x4b, 0x4b),
            },
            Palette::Classic => Self {
                low: Color::DarkGray,
                medium: Color::Cyan,
                high: Color::Magenta,
                critical: Color::Red,
            },
        }
    }

    pub fn band_color(&self, band: RiskBand) -> Color {
        match band {
            RiskBand::Low => self.low,
            RiskBand::Medium => self.medium,
            RiskBand::High => self.high,
            RiskBand::Critical => self.critical,
        }
    }

    /// Badge style for a score cell. Unresolved cells render dim.
    pub fn score_style(&self, cell: ScoreCell) -> Style {
        match cell.value() {
            Some(score) => Style::default()
                .fg(self.band_color(RiskBand::classify(score)))
                .add_modifier(Modifier::BOLD),
            None => Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Badge style for an action severity. Unknown actions get none.
    pub fn severity_style(&self, severity: ActionSeverity) -> Style {
        match severity {
            ActionSeverity::Critical => Style::default()
                .fg(self.critical)
                .add_modifier(Modifier::BOLD),
            ActionSeverity::High => Style::default().fg(self.high),
            ActionSeverity::Medium => Style::default().fg(self.medium),
            ActionSeverity::None => Style::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Palette::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_palette_name_falls_back() {
        assert_eq!(Palette::from_name("classic"), Palette::Classic);
        assert_eq!(Palette::from_name("CLASSIC"), Palette::Classic);
        assert_eq!(Palette::from_name("neon"), Palette::Default);
    }

    #[test]
    fn palettes_differ_only_in_color() {
        let default = Theme::new(Palette::Default);
        let classic = Theme::new(Palette::Classic);
        // same band resolves under both palettes, colors aside
        assert_ne!(
            default.band_color(RiskBand::Critical),
            default.band_color(RiskBand::Low)
        );
        assert_ne!(
            classic.band_color(RiskBand::Critical),
            classic.band_color(RiskBand::Low)
        );
    }
}
