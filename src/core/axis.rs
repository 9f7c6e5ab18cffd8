use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::quadrant::QUADRANT_MIDPOINT;
use crate::error::{MissingSetting, QuadrantError, QuadrantResult};
use crate::render::Color;

pub const AXIS_MIN: f64 = 0.0;
pub const AXIS_MAX: f64 = 50.0;
/// Distance between neighbouring gridlines.
pub const GRID_STEP: f64 = 5.0;
/// Only these tick values carry text.
pub const LABELED_TICKS: [f64; 3] = [AXIS_MIN, QUADRANT_MIDPOINT, AXIS_MAX];

/// Internal names of the two measures plotted on the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    pub x_field: String,
    pub y_field: String,
}

impl AxisSelection {
    /// Fails with "measures not selected" when either name is blank.
    pub fn new(x_field: impl Into<String>, y_field: impl Into<String>) -> QuadrantResult<Self> {
        let x_field = x_field.into().trim().to_owned();
        let y_field = y_field.into().trim().to_owned();
        if x_field.is_empty() || y_field.is_empty() {
            return Err(QuadrantError::MissingConfiguration(MissingSetting::Measures));
        }
        Ok(Self { x_field, y_field })
    }

    #[must_use]
    pub fn field_names(&self) -> [&str; 2] {
        [self.x_field.as_str(), self.y_field.as_str()]
    }
}

/// Stroke of one gridline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLineStyle {
    pub width: f64,
    pub color: Color,
}

impl GridLineStyle {
    pub const QUADRANT_DIVIDER: Self = Self {
        width: 2.0,
        color: Color::rgba(0.0, 0.0, 0.0, 0.3),
    };
    pub const REGULAR: Self = Self {
        width: 1.0,
        color: Color::rgba(0.0, 0.0, 0.0, 0.1),
    };

    /// Two-tier rule: the midpoint gridline is heavier and darker.
    #[must_use]
    pub fn for_value(value: f64) -> Self {
        if value == QUADRANT_MIDPOINT {
            Self::QUADRANT_DIVIDER
        } else {
            Self::REGULAR
        }
    }
}

/// One tick on a fixed-range axis. Unlabeled ticks keep their gridline and
/// carry an empty label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
    pub grid: GridLineStyle,
}

pub type AxisTicks = SmallVec<[AxisTick; 11]>;

#[must_use]
pub fn tick_label(value: f64) -> String {
    if LABELED_TICKS.contains(&value) {
        value.to_string()
    } else {
        String::new()
    }
}

/// Ticks from [`AXIS_MIN`] to [`AXIS_MAX`] every [`GRID_STEP`].
#[must_use]
pub fn fixed_axis_ticks() -> AxisTicks {
    let count = ((AXIS_MAX - AXIS_MIN) / GRID_STEP).round() as usize;
    (0..=count)
        .map(|index| {
            let value = AXIS_MIN + index as f64 * GRID_STEP;
            AxisTick {
                value,
                label: tick_label(value),
                grid: GridLineStyle::for_value(value),
            }
        })
        .collect()
}
