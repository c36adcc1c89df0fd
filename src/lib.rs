//! pie-compose: declarative pie/donut chart composition engine.
//!
//! A chart is declared as a tree of series, legend and tooltip nodes. The
//! engine flattens it into an ordered, backend-agnostic render plan and keeps
//! the hover state that drives tooltip visibility.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PieChart, PieChartConfig, SceneOutcome};
pub use error::{ChartError, ChartResult};
