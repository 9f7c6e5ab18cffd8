use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Split value shared by both axes.
pub const QUADRANT_MIDPOINT: f64 = 25.0;

/// One of the four regions of the plane split at [`QUADRANT_MIDPOINT`].
///
/// A coordinate equal to the midpoint belongs to the high side of its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// x >= 25, y >= 25 (top right).
    HighHigh,
    /// x < 25, y >= 25 (top left).
    LowHigh,
    /// x < 25, y < 25 (lower left).
    LowLow,
    /// x >= 25, y < 25 (lower right).
    HighLow,
}

/// Fill and border color of a plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadrantColors {
    pub fill: Color,
    pub border: Color,
}

impl Quadrant {
    pub const ALL: [Self; 4] = [Self::HighHigh, Self::LowHigh, Self::LowLow, Self::HighLow];

    /// Position in [`Quadrant::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::HighHigh => 0,
            Self::LowHigh => 1,
            Self::LowLow => 2,
            Self::HighLow => 3,
        }
    }

    #[must_use]
    pub fn classify(x: f64, y: f64) -> Self {
        let high_x = x >= QUADRANT_MIDPOINT;
        let high_y = y >= QUADRANT_MIDPOINT;
        match (high_x, high_y) {
            (true, true) => Self::HighHigh,
            (false, true) => Self::LowHigh,
            (false, false) => Self::LowLow,
            (true, false) => Self::HighLow,
        }
    }

    #[must_use]
    pub const fn colors(self) -> QuadrantColors {
        let (red, green, blue) = match self {
            Self::HighHigh => (75, 192, 192),
            Self::LowHigh => (255, 206, 86),
            Self::LowLow => (255, 99, 132),
            Self::HighLow => (255, 159, 64),
        };
        QuadrantColors {
            fill: Color::rgba8(red, green, blue, 0.6),
            border: Color::rgba8(red, green, blue, 1.0),
        }
    }

    /// Center of the quadrant as fractions of the plot area, measured from
    /// the left and top edges.
    #[must_use]
    pub const fn center_fraction(self) -> (f64, f64) {
        match self {
            Self::HighHigh => (0.75, 0.25),
            Self::LowHigh => (0.25, 0.25),
            Self::LowLow => (0.25, 0.75),
            Self::HighLow => (0.75, 0.75),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_belongs_to_high_side() {
        assert_eq!(Quadrant::classify(25.0, 25.0), Quadrant::HighHigh);
        assert_eq!(Quadrant::classify(24.999, 25.0), Quadrant::LowHigh);
        assert_eq!(Quadrant::classify(25.0, 24.999), Quadrant::HighLow);
        assert_eq!(Quadrant::classify(0.0, 0.0), Quadrant::LowLow);
    }

    #[test]
    fn colors_match_css_palette() {
        let colors = Quadrant::HighHigh.colors();
        assert_eq!(colors.fill.to_css(), "rgba(75, 192, 192, 0.6)");
        assert_eq!(colors.border.to_css(), "rgba(75, 192, 192, 1)");
        assert_eq!(
            Quadrant::HighLow.colors().fill.to_css(),
            "rgba(255, 159, 64, 0.6)"
        );
    }
}
