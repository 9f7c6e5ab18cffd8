use crate::error::{QuadrantError, QuadrantResult};

/// Linear mapping between a value domain and a pixel span.
///
/// The pixel span may be reversed (`pixel_start > pixel_end`) for vertical
/// axes where larger values sit higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> QuadrantResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(QuadrantError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
            return Err(QuadrantError::InvalidData(
                "scale pixel span must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    pub fn domain_to_pixel(self, value: f64) -> QuadrantResult<f64> {
        if !value.is_finite() {
            return Err(QuadrantError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.pixel_start + normalized * (self.pixel_end - self.pixel_start))
    }
}
