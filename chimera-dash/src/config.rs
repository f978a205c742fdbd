//! Dashboard configuration
//!
//! All settings come from environment variables (a `.env` file is loaded
//! first if present):
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | CHIMERA_API_URL | http://127.0.0.1:8000 | Scoring API base URL |
//! | CHIMERA_TIMEOUT_SECS | 30 | Request timeout |
//! | CHIMERA_PAGE_LIMIT | 50 | Scored-logs page size |
//! | CHIMERA_THEME | default | Score palette: default \| classic |

use chimera_client::ClientConfig;

use crate::ui::theme::Palette;

#[derive(Debug, Clone)]
pub struct DashConfig {
    pub api_url: String,
    pub timeout_secs: u64,
    pub page_limit: u32,
    pub palette: Palette,
}

impl DashConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("CHIMERA_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".into()),
            timeout_secs: std::env::var("CHIMERA_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            page_limit: std::env::var("CHIMERA_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            palette: std::env::var("CHIMERA_THEME")
                .ok()
                .map(|v| Palette::from_name(&v))
                .unwrap_or_default(),
        }
    }

    /// Client configuration derived from the dashboard settings.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url)
            .with_timeout(self.timeout_secs)
            .with_page_limit(self.page_limit)
    }
}
