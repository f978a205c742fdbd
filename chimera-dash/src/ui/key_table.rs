//! Key inventory table

use chrono::DateTime;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::pages::KeyRow;

use super::Theme;

/// Render the inventory rows. Pure view: rows and cursor come from the
/// page, styling from the theme.
pub fn render(frame: &mut Frame, area: Rect, rows: &[KeyRow], cursor: usize, theme: &Theme) {
    let header = Row::new(vec![
        "Key ID",
        "Algorithm",
        "Created",
        "HSM",
        "Rotation",
        "Score",
        "Recommended Action",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let body = rows.iter().map(|row| {
        let score_badge = Span::styled(row.score.to_string(), theme.score_style(row.score));
        let action_badge = match &row.action {
            Some(cell) => action_span(cell, theme),
            None => Span::raw("-"),
        };

        Row::new(vec![
            Cell::from(row.key.key_id.clone()),
            Cell::from(row.key.algorithm.clone()),
            Cell::from(short_date(&row.key.creation_date)),
            Cell::from(yes_no(row.key.is_hsm_backed)),
            Cell::from(yes_no(row.key.rotation_enabled)),
            Cell::from(score_badge),
            Cell::from(action_badge),
        ])
    });

    let table = Table::new(
        body,
        [
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" Key Inventory "))
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(table, area, &mut state);
}

pub(super) fn action_span<'a>(cell: &crate::pages::ActionCell, theme: &Theme) -> Span<'a> {
    use crate::pages::ActionCell;
    match cell {
        ActionCell::Loading => Span::styled(
            "Loading...".to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ),
        ActionCell::Error => Span::styled("Error".to_string(), Style::default().add_modifier(Modifier::DIM)),
        ActionCell::Resolved(action) => Span::styled(
            action.to_string(),
            theme.severity_style(action.severity()),
        ),
    }
}

pub(super) fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

pub(super) fn short_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_shorten_when_parsable() {
        assert_eq!(short_date("2024-03-05T10:00:00+00:00"), "2024-03-05");
        // unparsable timestamps pass through untouched
        assert_eq!(short_date("yesterday"), "yesterday");
    }
}
