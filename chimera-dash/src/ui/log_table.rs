//! Access log table

use chrono::DateTime;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};
use shared::ScoreCell;

use crate::pages::{AccessLogsPage, LogRow};

use super::{Theme, key_table::action_span};

/// Render the current page of logs in the page's display order.
pub fn render(frame: &mut Frame, area: Rect, page: &AccessLogsPage, theme: &Theme) {
    let header = Row::new(vec![
        "Score",
        "Timestamp",
        "User",
        "Action",
        "Source IP",
        "Status",
        "Recommendation",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let order = page.display_order();
    let body = order.iter().map(|&i| log_row(&page.rows[i], theme));

    let title = format!(
        " Access Logs — page {}/{} — sort: {} ",
        page.current_page,
        page.total_pages.max(1),
        page.sort_by.label()
    );

    let table = Table::new(
        body,
        [
            Constraint::Length(7),
            Constraint::Length(20),
            Constraint::Min(24),
            Constraint::Length(20),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Min(16),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default().with_selected(Some(page.cursor));
    frame.render_stateful_widget(table, area, &mut state);
}

fn log_row<'a>(row: &'a LogRow, theme: &Theme) -> Row<'a> {
    let score_cell = ScoreCell::from(row.log.anomaly_score);
    let score_badge = Span::styled(score_cell.to_string(), theme.score_style(score_cell));
    let action_badge = match &row.action {
        Some(cell) => action_span(cell, theme),
        None => Span::raw("-"),
    };

    Row::new(vec![
        Cell::from(score_badge),
        Cell::from(short_time(&row.log.entry.timestamp)),
        Cell::from(row.log.entry.user_id.clone()),
        Cell::from(row.log.entry.action.clone()),
        Cell::from(row.log.entry.source_ip.clone()),
        Cell::from(row.log.entry.status.clone()),
        Cell::from(action_badge),
    ])
}

fn short_time(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}
