//! Application shell
//!
//! Owns the HTTP client, the three pages, and the active tab. The UI
//! loop feeds it `AppEvent`s; network tasks the pages spawn report back
//! through the same channel. Entering a tab always rebuilds that page's
//! records from a fresh fetch.

use chimera_client::HttpClient;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::mpsc::UnboundedSender;
use tui_logger::TuiLoggerWidget;

use crate::{
    config::DashConfig,
    events::AppEvent,
    pages::{AccessLogsPage, HomePage, InventoryPage, LoadState},
    ui::{self, Theme},
};

/// Dashboard tabs, in navbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home = 0,
    Inventory = 1,
    AccessLogs = 2,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Inventory, Page::AccessLogs];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Inventory => "Inventory",
            Self::AccessLogs => "Access Logs",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Home => Self::Inventory,
            Self::Inventory => Self::AccessLogs,
            Self::AccessLogs => Self::Home,
        }
    }
}

pub struct App {
    client: HttpClient,
    theme: Theme,
    tx: UnboundedSender<AppEvent>,
    page: Page,
    home: HomePage,
    inventory: InventoryPage,
    logs: AccessLogsPage,
    show_log_pane: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &DashConfig, tx: UnboundedSender<AppEvent>) -> Self {
        let client = config.client_config().build_http_client();
        let mut app = Self {
            client,
            theme: Theme::new(config.palette),
            tx,
            page: Page::Home,
            home: HomePage::default(),
            inventory: InventoryPage::default(),
            logs: AccessLogsPage::default(),
            show_log_pane: false,
            should_quit: false,
        };
        app.home.reload(&app.client, &app.tx);
        app
    }

    // ========== Event handling ==========

    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(key) => self.handle_key(key),
            AppEvent::InventoryKeys(result) => self.inventory.on_keys(result),
            AppEvent::InventoryScores(outcomes) => self.inventory.on_scores(outcomes),
            AppEvent::InventoryAction { key_id, result } => {
                self.inventory.on_action(&key_id, result)
            }
            AppEvent::HomeKeys(result) => self.home.on_keys(result),
            AppEvent::HomeScores(outcomes) => self.home.on_scores(outcomes),
            AppEvent::LogsPage(result) => self.logs.on_page(result),
            AppEvent::LogsAction { log_id, result } => self.logs.on_action(&log_id, result),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.switch_to(self.page.next()),
            KeyCode::Char('1') => self.switch_to(Page::Home),
            KeyCode::Char('2') => self.switch_to(Page::Inventory),
            KeyCode::Char('3') => self.switch_to(Page::AccessLogs),
            KeyCode::Char('r') => self.reload_current(),
            KeyCode::Char('L') => self.show_log_pane = !self.show_log_pane,
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Char('a') => self.analyze_selected(),
            KeyCode::Char('s') => {
                if self.page == Page::AccessLogs {
                    self.logs.toggle_sort();
                }
            }
            KeyCode::Char('n') | KeyCode::Right => {
                if self.page == Page::AccessLogs {
                    self.logs.next_page(&self.client, &self.tx);
                }
            }
            KeyCode::Char('p') | KeyCode::Left => {
                if self.page == Page::AccessLogs {
                    self.logs.previous_page(&self.client, &self.tx);
                }
            }
            _ => {}
        }
    }

    /// Navigate to a tab. Entering a tab discards its old records and
    /// starts a fresh load, like a component remount.
    fn switch_to(&mut self, page: Page) {
        if self.page == page {
            return;
        }
        self.page = page;
        self.reload_current();
    }

    fn reload_current(&mut self) {
        match self.page {
            Page::Home => self.home.reload(&self.client, &self.tx),
            Page::Inventory => self.inventory.reload(&self.client, &self.tx),
            Page::AccessLogs => self.logs.reload(&self.client, &self.tx),
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.page {
            Page::Home => {}
            Page::Inventory => self.inventory.move_cursor(delta),
            Page::AccessLogs => self.logs.move_cursor(delta),
        }
    }

    fn analyze_selected(&mut self) {
        match self.page {
            Page::Home => {}
            Page::Inventory => self.inventory.analyze_selected(&self.client, &self.tx),
            Page::AccessLogs => self.logs.analyze_selected(&self.client, &self.tx),
        }
    }

    // ========== Rendering ==========

    pub fn render(&self, frame: &mut Frame) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(frame.area());

        ui::navbar::render(frame, outer[0], self.page);

        let body = if self.show_log_pane {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(5), Constraint::Length(8)])
                .split(outer[1]);
            self.render_log_pane(frame, split[1]);
            split[0]
        } else {
            outer[1]
        };

        match self.page {
            Page::Home => self.render_home(frame, body),
            Page::Inventory => self.render_inventory(frame, body),
            Page::AccessLogs => self.render_logs(frame, body),
        }

        self.render_help(frame, outer[2]);
    }

    fn render_home(&self, frame: &mut Frame, area: Rect) {
        if self.render_page_notice(frame, area, &self.home.load, "Loading key inventory...") {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(8)])
            .split(area);

        let kpis = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        kpi_card(
            frame,
            kpis[0],
            "Total Keys Monitored",
            self.home.total_keys().to_string(),
        );
        let high_risk = if self.home.scoring_in_progress() {
            "...".to_string()
        } else {
            self.home.high_risk_keys().to_string()
        };
        kpi_card(frame, kpis[1], "High-Risk Keys (score > 50)", high_risk);

        ui::risk_chart::render(frame, rows[1], &self.home.band_counts(), &self.theme);
    }

    fn render_inventory(&self, frame: &mut Frame, area: Rect) {
        if self.render_page_notice(
            frame,
            area,
            &self.inventory.load,
            "Loading key inventory...",
        ) {
            return;
        }
        ui::key_table::render(
            frame,
            area,
            &self.inventory.rows,
            self.inventory.cursor,
            &self.theme,
        );
    }

    fn render_logs(&self, frame: &mut Frame, area: Rect) {
        if self.render_page_notice(
            frame,
            area,
            &self.logs.load,
            "Loading and analyzing logs...",
        ) {
            return;
        }
        ui::log_table::render(frame, area, &self.logs, &self.theme);
    }

    /// Draw the loading/error notice when the page has no rows to show.
    /// Returns true when the notice replaced the page body.
    fn render_page_notice(
        &self,
        frame: &mut Frame,
        area: Rect,
        load: &LoadState,
        loading_text: &str,
    ) -> bool {
        let text = match load {
            LoadState::Loading | LoadState::Idle => loading_text.to_string(),
            LoadState::Failed(message) => format!("Error: {}", message),
            LoadState::Loaded => return false,
        };
        let style = match load {
            LoadState::Failed(_) => Style::default().fg(ratatui::style::Color::Red),
            _ => Style::default().add_modifier(Modifier::DIM),
        };
        let notice = Paragraph::new(Line::styled(text, style))
            .block(Block::default().borders(Borders::ALL).title(format!(
                " {} ",
                self.page.title()
            )));
        frame.render_widget(notice, area);
        true
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help = match self.page {
            Page::AccessLogs => {
                "q quit | Tab/1-3 pages | j/k select | a analyze | s sort | n/p page | r reload | L logs"
            }
            _ => "q quit | Tab/1-3 pages | j/k select | a analyze | r reload | L logs",
        };
        frame.render_widget(
            Paragraph::new(Line::styled(
                help,
                Style::default().add_modifier(Modifier::DIM),
            )),
            area,
        );
    }

    fn render_log_pane(&self, frame: &mut Frame, area: Rect) {
        let widget = TuiLoggerWidget::default()
            .block(Block::default().borders(Borders::ALL).title(" Log "));
        frame.render_widget(widget, area);
    }
}

fn kpi_card(frame: &mut Frame, area: Rect, title: &str, value: String) {
    let card = Paragraph::new(Line::styled(
        value,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title)),
    );
    frame.render_widget(card, area);
}
