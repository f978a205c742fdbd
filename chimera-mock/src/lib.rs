//! Chimera Mock - stand-in scoring API
//!
//! Serves the four scoring endpoints with deterministic synthetic data so
//! the dashboard and client can run without the real model backend.
//! Scores come from fixed heuristics, not a model; the dashboard consumes
//! them opaquely either way.

pub mod api;
pub mod logs;
pub mod scoring;
pub mod state;

pub use api::router;
pub use state::AppState;
