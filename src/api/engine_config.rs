use serde::{Deserialize, Serialize};

use crate::core::ClockSource;
use crate::error::{ChartError, ChartResult};
use crate::interaction::NavigationConfig;
use crate::render::Color;

/// Colors of every non-series element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub label_line_color: Color,
    pub label_text_color: Color,
    pub body_background_color: Color,
    pub footer_background_color: Color,
    pub selected_day_background_color: Color,
    pub day_text_color: Color,
    /// Day labels after today.
    pub disabled_day_text_color: Color,
    /// Day label inside the selection circle.
    pub selected_day_text_color: Color,
    pub middle_line_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            label_line_color: Color::LIGHT_GRAY,
            label_text_color: Color::LIGHT_GRAY,
            body_background_color: Color::LIGHT_GRAY,
            footer_background_color: Color::WHITE,
            selected_day_background_color: Color::DARK_GRAY,
            day_text_color: Color::DARK_GRAY,
            disabled_day_text_color: Color::LIGHT_GRAY,
            selected_day_text_color: Color::WHITE,
            middle_line_color: Color::CYAN,
        }
    }
}

impl ChartStyle {
    pub(super) fn colors(&self) -> [(&'static str, Color); 9] {
        [
            ("label_line_color", self.label_line_color),
            ("label_text_color", self.label_text_color),
            ("body_background_color", self.body_background_color),
            ("footer_background_color", self.footer_background_color),
            ("selected_day_background_color", self.selected_day_background_color),
            ("day_text_color", self.day_text_color),
            ("disabled_day_text_color", self.disabled_day_text_color),
            ("selected_day_text_color", self.selected_day_text_color),
            ("middle_line_color", self.middle_line_color),
        ]
    }
}

/// Host-owned chart configuration.
///
/// Sizes are in pixels. Serializable so hosts can keep chart setup in a
/// file instead of wiring every field by hand; missing fields take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateChartConfig {
    pub min_value: f64,
    pub max_value: f64,
    pub num_visible_days: u32,
    pub num_horizontal_labels: u32,
    pub style: ChartStyle,
    pub chart_padding_top: f64,
    /// `None` means `0` when `min_value == 0` and `25` otherwise.
    pub chart_padding_bottom: Option<f64>,
    pub label_text_width: f64,
    pub day_text_size: f64,
    pub label_text_size: f64,
    pub footer_height: f64,
    pub data_point_radius: f64,
    pub data_line_thickness: f64,
    pub label_line_thickness: f64,
    pub middle_line_thickness: f64,
    pub middle_line_visible: bool,
    /// Skips the bottom row label when the range starts at zero.
    pub hide_zero_baseline_label: bool,
    pub navigation: NavigationConfig,
    pub clock: ClockSource,
}

impl Default for DateChartConfig {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 100.0,
            num_visible_days: 7,
            num_horizontal_labels: 3,
            style: ChartStyle::default(),
            chart_padding_top: 50.0,
            chart_padding_bottom: None,
            label_text_width: 50.0,
            day_text_size: 16.0,
            label_text_size: 14.0,
            footer_height: 136.0,
            data_point_radius: 10.0,
            data_line_thickness: 8.0,
            label_line_thickness: 4.0,
            middle_line_thickness: 4.0,
            middle_line_visible: false,
            hide_zero_baseline_label: false,
            navigation: NavigationConfig::default(),
            clock: ClockSource::Local,
        }
    }
}

impl DateChartConfig {
    #[must_use]
    pub fn with_value_range(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    #[must_use]
    pub fn with_visible_days(mut self, num_visible_days: u32) -> Self {
        self.num_visible_days = num_visible_days;
        self
    }

    #[must_use]
    pub fn with_horizontal_labels(mut self, num_horizontal_labels: u32) -> Self {
        self.num_horizontal_labels = num_horizontal_labels;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: ClockSource) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_navigation(mut self, navigation: NavigationConfig) -> Self {
        self.navigation = navigation;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn resolved_padding_bottom(&self) -> f64 {
        self.chart_padding_bottom
            .unwrap_or(if self.min_value == 0.0 { 0.0 } else { 25.0 })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))?;
        super::validation::validate_config(&config)?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DateChartConfig;

    #[test]
    fn bottom_padding_depends_on_min_value() {
        assert_eq!(DateChartConfig::default().resolved_padding_bottom(), 0.0);
        let shifted = DateChartConfig::default().with_value_range(10.0, 100.0);
        assert_eq!(shifted.resolved_padding_bottom(), 25.0);
        let explicit = DateChartConfig {
            chart_padding_bottom: Some(4.0),
            ..shifted
        };
        assert_eq!(explicit.resolved_padding_bottom(), 4.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = DateChartConfig::from_json_str(r#"{ "num_visible_days": 9 }"#)
            .expect("parse config");
        assert_eq!(config.num_visible_days, 9);
        assert_eq!(config.footer_height, 136.0);
    }
}
