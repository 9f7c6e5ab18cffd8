//! quadrant-chart: headless quadrant scatter charts over SharePoint list data.
//!
//! Records fetched from a list are classified into four quadrants on a fixed
//! 0 to 50 scale and laid out into backend-agnostic render frames, alongside a
//! raw issue table. Drawing is left to a `Renderer` implementation.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartView, IssueDetailsWidget, QuadrantChartConfig, QuadrantChartWidget};
pub use error::{QuadrantError, QuadrantResult};
