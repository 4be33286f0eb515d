use tracing::debug;

use crate::core::{ValueScale, Viewport};
use crate::error::{ChartError, ChartResult};

use super::DateChartConfig;
use super::validation::validate_config;

/// Immutable geometry and style derived from a config and a viewport.
///
/// Built in one step by [`RenderContext::configure`]; the draw pass and the
/// navigation engine only ever see a fully populated context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    config: DateChartConfig,
    viewport: Viewport,
    day_width: f64,
    day_offset: i64,
    footer_top: f64,
    value_scale: ValueScale,
}

impl RenderContext {
    pub fn configure(config: DateChartConfig, viewport: Viewport) -> ChartResult<Self> {
        validate_config(&config)?;
        viewport.validate()?;

        let width = viewport.width_px();
        let height = viewport.height_px();
        let visible_days = f64::from(config.num_visible_days);

        let day_width = (width - visible_days - 1.0) / visible_days;
        if !day_width.is_finite() || day_width <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let footer_top = height - config.footer_height;
        let plot_height = footer_top - config.chart_padding_top - config.resolved_padding_bottom();
        if plot_height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let value_scale = ValueScale::new(
            config.min_value,
            config.max_value,
            config.chart_padding_top,
            plot_height,
        )?;

        debug!(
            width = viewport.width,
            height = viewport.height,
            day_width,
            plot_height,
            "render context configured"
        );

        Ok(Self {
            config,
            viewport,
            day_width,
            day_offset: i64::from(config.num_visible_days / 2),
            footer_top,
            value_scale,
        })
    }

    #[must_use]
    pub fn config(&self) -> &DateChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.viewport.width_px()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.viewport.height_px()
    }

    #[must_use]
    pub fn day_width(&self) -> f64 {
        self.day_width
    }

    /// Days rendered left of the centered day, `floor(numOfVisibleDays / 2)`.
    #[must_use]
    pub fn day_offset(&self) -> i64 {
        self.day_offset
    }

    /// Y where the footer band starts.
    #[must_use]
    pub fn footer_top(&self) -> f64 {
        self.footer_top
    }

    /// Vertical center of the footer band, where day labels sit.
    #[must_use]
    pub fn footer_center_y(&self) -> f64 {
        self.height() - self.config.footer_height / 2.0
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.width() / 2.0
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.value_scale
    }

    #[must_use]
    pub fn selection_radius(&self) -> f64 {
        self.config.day_text_size * 1.2
    }

    /// Right edge of value labels and extra-line labels.
    #[must_use]
    pub fn label_x(&self) -> f64 {
        self.width() - self.config.label_text_width / 4.0
    }

    #[must_use]
    pub fn label_rows(&self) -> usize {
        self.config.num_horizontal_labels as usize
    }

    #[must_use]
    pub fn visible_days(&self) -> i64 {
        i64::from(self.config.num_visible_days)
    }
}
