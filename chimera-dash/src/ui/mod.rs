//! Presentation widgets
//!
//! Pure rendering: every widget draws whatever rows it is handed and
//! holds no state of its own. Colors come from the active `Theme`.

pub mod key_table;
pub mod log_table;
pub mod navbar;
pub mod risk_chart;
pub mod theme;

pub use theme::Theme;
