use serde::{Deserialize, Serialize};

use crate::core::{AxisSelection, Quadrant, QuadrantColors, Record};

/// A record placed on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantPoint {
    pub record_id: i64,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub quadrant: Quadrant,
    pub colors: QuadrantColors,
}

impl QuadrantPoint {
    /// `None` when either measure is missing or not numeric.
    #[must_use]
    pub fn from_record(record: &Record, axes: &AxisSelection) -> Option<Self> {
        let x = record.measure(&axes.x_field)?;
        let y = record.measure(&axes.y_field)?;
        let quadrant = Quadrant::classify(x, y);
        Some(Self {
            record_id: record.id,
            x,
            y,
            label: record.display_label(),
            quadrant,
            colors: quadrant.colors(),
        })
    }
}

/// Points of every record with both measures numeric, in record order.
#[must_use]
pub fn build_points(records: &[Record], axes: &AxisSelection) -> Vec<QuadrantPoint> {
    let points: Vec<QuadrantPoint> = records
        .iter()
        .filter_map(|record| QuadrantPoint::from_record(record, axes))
        .collect();
    tracing::debug!(
        records = records.len(),
        points = points.len(),
        x = %axes.x_field,
        y = %axes.y_field,
        "classified records"
    );
    points
}

/// Number of points per quadrant, in [`Quadrant::ALL`] order.
#[must_use]
pub fn quadrant_counts(points: &[QuadrantPoint]) -> [usize; 4] {
    let mut counts = [0; 4];
    for point in points {
        counts[point.quadrant.index()] += 1;
    }
    counts
}
