use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Value axis mapped onto the inverted Y pixel axis of the plot band.
///
/// `max_value` lands on `top_padding`, `min_value` on
/// `top_padding + plot_height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    min_value: f64,
    max_value: f64,
    top_padding: f64,
    plot_height: f64,
}

impl ValueScale {
    pub fn new(
        min_value: f64,
        max_value: f64,
        top_padding: f64,
        plot_height: f64,
    ) -> ChartResult<Self> {
        if !min_value.is_finite() || !max_value.is_finite() || min_value == max_value {
            return Err(ChartError::InvalidConfig(
                "value bounds must be finite and distinct".to_owned(),
            ));
        }
        if !top_padding.is_finite() || top_padding < 0.0 {
            return Err(ChartError::InvalidConfig(
                "top padding must be finite and >= 0".to_owned(),
            ));
        }
        if !plot_height.is_finite() || plot_height <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "plot height must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            min_value,
            max_value,
            top_padding,
            plot_height,
        })
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.min_value, self.max_value)
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.plot_height
    }

    /// Pixels per value unit.
    #[must_use]
    pub fn value_factor(self) -> f64 {
        self.plot_height / (self.max_value - self.min_value)
    }

    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        (self.max_value - value) * self.value_factor() + self.top_padding
    }

    #[must_use]
    pub fn y_to_value(self, y: f64) -> f64 {
        self.max_value - (y - self.top_padding) / self.value_factor()
    }

    /// Value printed on label row `row` out of `rows` evenly spaced rows.
    #[must_use]
    pub fn row_value(self, row: usize, rows: usize) -> f64 {
        let step = (self.max_value - self.min_value) / (rows.saturating_sub(1).max(1)) as f64;
        self.max_value - row as f64 * step
    }

    /// Y pixel of label row `row` out of `rows`.
    #[must_use]
    pub fn row_y(self, row: usize, rows: usize) -> f64 {
        let spacing = self.plot_height / (rows.saturating_sub(1).max(1)) as f64;
        row as f64 * spacing + self.top_padding
    }
}
