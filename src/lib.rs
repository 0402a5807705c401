//! Live telemetry dashboard for a hydro plant: simulated readings rendered
//! as KPI cards, a rolling chart and a rolling table in the terminal.

pub mod app;
pub mod config;
pub mod error;
pub mod panel;
pub mod telemetry;
pub mod ui;
pub mod util;

pub use app::App;
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
