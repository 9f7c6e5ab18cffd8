use serde::{Deserialize, Serialize};

use crate::error::{QuadrantError, QuadrantResult};

pub const MIN_CHART_SIZE: u8 = 1;
pub const MAX_CHART_SIZE: u8 = 10;
pub const DEFAULT_CHART_SIZE: u8 = 5;

pub const MIN_CONTAINER_PX: f64 = 380.0;
pub const MAX_CONTAINER_PX: f64 = 1000.0;
/// Padding subtracted from the container to get the plotting surface (20px per side).
pub const CONTAINER_PADDING_PX: f64 = 40.0;

/// Slider-style chart size in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ChartSize(u8);

impl ChartSize {
    pub fn new(value: u8) -> QuadrantResult<Self> {
        if (MIN_CHART_SIZE..=MAX_CHART_SIZE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(QuadrantError::InvalidChartSize(value))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Container edge length: 380px at size 1, 1000px at size 10, linear between.
    #[must_use]
    pub fn container_px(self) -> f64 {
        let steps = f64::from(MAX_CHART_SIZE - MIN_CHART_SIZE);
        let fraction = f64::from(self.0 - MIN_CHART_SIZE) / steps;
        MIN_CONTAINER_PX + fraction * (MAX_CONTAINER_PX - MIN_CONTAINER_PX)
    }

    #[must_use]
    pub fn inner_px(self) -> f64 {
        self.container_px() - CONTAINER_PADDING_PX
    }
}

impl Default for ChartSize {
    fn default() -> Self {
        Self(DEFAULT_CHART_SIZE)
    }
}

impl TryFrom<u8> for ChartSize {
    type Error = QuadrantError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChartSize> for u8 {
    fn from(size: ChartSize) -> Self {
        size.0
    }
}
