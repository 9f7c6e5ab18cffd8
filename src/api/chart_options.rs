use serde::{Deserialize, Serialize};

use crate::api::points::QuadrantPoint;
use crate::core::axis::{AXIS_MAX, AXIS_MIN};
use crate::core::{AxisSelection, AxisTicks, ChartSize, fixed_axis_ticks};
use crate::extensions::OverlayLabels;

pub const POINT_RADIUS_PX: f64 = 6.0;
pub const POINT_HOVER_RADIUS_PX: f64 = 8.0;

/// One fixed-range axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub title: String,
    pub min: f64,
    pub max: f64,
    pub ticks: AxisTicks,
}

impl AxisOptions {
    #[must_use]
    pub fn fixed(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            min: AXIS_MIN,
            max: AXIS_MAX,
            ticks: fixed_axis_ticks(),
        }
    }
}

/// Container and plotting surface edge lengths in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub size: ChartSize,
    pub container_px: f64,
    pub inner_px: f64,
}

impl From<ChartSize> for ChartDimensions {
    fn from(size: ChartSize) -> Self {
        Self {
            size,
            container_px: size.container_px(),
            inner_px: size.inner_px(),
        }
    }
}

/// Declarative options handed to the scatter renderer.
///
/// Derived purely from the axis selection and style toggles; rebuild it on
/// every render instead of caching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: String,
    pub show_legend: bool,
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
    pub dimensions: ChartDimensions,
    pub point_radius_px: f64,
    pub point_hover_radius_px: f64,
    pub overlay: Option<OverlayLabels>,
}

impl ChartOptions {
    /// Tooltip text of a point: `"{label}: ({x}, {y})"`.
    #[must_use]
    pub fn tooltip_label(&self, point: &QuadrantPoint) -> String {
        tooltip_label(point)
    }
}

#[must_use]
pub fn tooltip_label(point: &QuadrantPoint) -> String {
    let label = if point.label.is_empty() {
        "Item"
    } else {
        point.label.as_str()
    };
    format!("{label}: ({}, {})", point.x, point.y)
}

/// Builds [`ChartOptions`] from a complete axis selection.
///
/// Requiring an [`AxisSelection`] means the builder can never run with a
/// missing measure.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptionsBuilder {
    x_title: String,
    y_title: String,
    size: ChartSize,
    overlay: Option<OverlayLabels>,
}

impl ChartOptionsBuilder {
    /// Axis titles default to the measures' internal names.
    #[must_use]
    pub fn new(axes: &AxisSelection) -> Self {
        Self {
            x_title: axes.x_field.clone(),
            y_title: axes.y_field.clone(),
            size: ChartSize::default(),
            overlay: None,
        }
    }

    #[must_use]
    pub fn axis_titles(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.x_title = x_title.into();
        self.y_title = y_title.into();
        self
    }

    #[must_use]
    pub fn size(mut self, size: ChartSize) -> Self {
        self.size = size;
        self
    }

    /// `None` hides the overlay labels.
    #[must_use]
    pub fn overlay(mut self, overlay: Option<OverlayLabels>) -> Self {
        self.overlay = overlay;
        self
    }

    #[must_use]
    pub fn build(self) -> ChartOptions {
        ChartOptions {
            title: format!("{} vs {}", self.x_title, self.y_title),
            show_legend: false,
            x_axis: AxisOptions::fixed(self.x_title),
            y_axis: AxisOptions::fixed(self.y_title),
            dimensions: ChartDimensions::from(self.size),
            point_radius_px: POINT_RADIUS_PX,
            point_hover_radius_px: POINT_HOVER_RADIUS_PX,
            overlay: self.overlay,
        }
    }
}
