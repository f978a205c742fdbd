//! Risk distribution chart
//!
//! Bar chart over the four risk bands; the terminal stand-in for the
//! source dashboard's pie chart. Counts come from the page, colors from
//! the theme.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};
use shared::RiskBand;

use super::Theme;

pub fn render(frame: &mut Frame, area: Rect, counts: &[(RiskBand, u64); 4], theme: &Theme) {
    let bars: Vec<Bar> = counts
        .iter()
        .map(|(band, count)| {
            Bar::default()
                .label(band.label().into())
                .value(*count)
                .style(Style::default().fg(theme.band_color(*band)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Risk Distribution "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2);

    frame.render_widget(chart, area);
}
