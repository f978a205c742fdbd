//! Tab bar

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
};

use crate::app::Page;

pub fn render(frame: &mut Frame, area: Rect, active: Page) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .map(|page| Line::from(format!(" {} ", page.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(" Project Chimera "),
        )
        .select(active as usize)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));

    frame.render_widget(tabs, area);
}
