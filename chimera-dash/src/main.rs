//! Project Chimera dashboard
//!
//! Terminal dashboard over the scoring API: key inventory with
//! vulnerability scores, anomaly-scored access logs, and per-record
//! remediation recommendations.
//!
//! Run: `cargo run -p chimera-dash` (see config.rs for environment
//! variables; `chimera-mock` provides a local backend).

mod app;
mod config;
mod events;
mod pages;
mod ui;

use std::time::Duration;

use anyhow::Result;
use app::App;
use config::DashConfig;
use events::AppEvent;
use tokio::sync::mpsc;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Route tracing into the in-app log pane instead of stdout, which the
    // terminal UI owns.
    tui_logger::init_logger(log::LevelFilter::Debug)?;
    tui_logger::set_default_level(log::LevelFilter::Debug);
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .init();

    let config = DashConfig::from_env();
    tracing::info!("dashboard starting against {}", config.api_url);

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    spawn_input_reader(tx.clone());

    let mut terminal = ratatui::init();
    let mut app = App::new(&config, tx);

    let result = run(&mut terminal, &mut app, &mut rx).await;
    ratatui::restore();
    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Redraw on every event; tick so in-flight spinner text stays live
        match tokio::time::timeout(Duration::from_millis(250), rx.recv()).await {
            Ok(Some(event)) => app.handle(event),
            Ok(None) => break,
            Err(_) => {}
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Forward terminal input onto the app channel from a dedicated thread,
/// so the async loop only ever waits in one place.
fn spawn_input_reader(tx: mpsc::UnboundedSender<AppEvent>) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(crossterm::event::Event::Key(key)) => {
                    if tx.send(AppEvent::Input(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}
