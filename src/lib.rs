//! date-chart-rs: a horizontally scrollable one-value-per-day chart engine.
//!
//! The crate turns drag, fling and tap input into a day-snapped horizontal
//! offset, maps that offset to calendar dates, and produces backend-agnostic
//! render frames. Data arrives per month through
//! [`api::ChartEventHandler::on_missing_month`] and
//! [`api::DateChartEngine::add_lines`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEventHandler, DateChartConfig, DateChartEngine};
pub use error::{ChartError, ChartResult};
