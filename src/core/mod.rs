pub mod axis;
pub mod measure;
pub mod quadrant;
pub mod scale;
pub mod sizing;
pub mod types;

pub use axis::{AxisSelection, AxisTick, AxisTicks, GridLineStyle, fixed_axis_ticks};
pub use measure::{parse_measure, parse_measure_text};
pub use quadrant::{QUADRANT_MIDPOINT, Quadrant, QuadrantColors};
pub use scale::LinearScale;
pub use sizing::ChartSize;
pub use types::{FieldValue, PlotArea, Record, Viewport};
