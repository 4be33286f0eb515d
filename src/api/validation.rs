use crate::error::{ChartError, ChartResult};
use crate::interaction::NavigationConfig;

use super::DateChartConfig;

pub(super) fn validate_config(config: &DateChartConfig) -> ChartResult<()> {
    if config.num_horizontal_labels < 2 {
        return Err(ChartError::InvalidConfig(
            "num_horizontal_labels must be >= 2".to_owned(),
        ));
    }
    if config.num_visible_days == 0 {
        return Err(ChartError::InvalidConfig(
            "num_visible_days must be > 0".to_owned(),
        ));
    }
    if !config.min_value.is_finite() || !config.max_value.is_finite() {
        return Err(ChartError::InvalidConfig(
            "value bounds must be finite".to_owned(),
        ));
    }
    if config.min_value >= config.max_value {
        return Err(ChartError::InvalidConfig(
            "min_value must be < max_value".to_owned(),
        ));
    }

    for (name, value) in [
        ("chart_padding_top", config.chart_padding_top),
        ("chart_padding_bottom", config.resolved_padding_bottom()),
        ("label_text_width", config.label_text_width),
        ("footer_height", config.footer_height),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }

    for (name, value) in [
        ("day_text_size", config.day_text_size),
        ("label_text_size", config.label_text_size),
        ("data_point_radius", config.data_point_radius),
        ("data_line_thickness", config.data_line_thickness),
        ("label_line_thickness", config.label_line_thickness),
        ("middle_line_thickness", config.middle_line_thickness),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    for (name, color) in config.style.colors() {
        color
            .validate()
            .map_err(|e| ChartError::InvalidConfig(format!("{name}: {e}")))?;
    }

    validate_navigation_config(config.navigation)
}

pub(super) fn validate_navigation_config(config: NavigationConfig) -> ChartResult<()> {
    if !config.scroll_speed.is_finite() || config.scroll_speed <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "scroll_speed must be finite and > 0".to_owned(),
        ));
    }
    if !config.snap_duration_per_day_ms.is_finite() || config.snap_duration_per_day_ms < 0.0 {
        return Err(ChartError::InvalidConfig(
            "snap_duration_per_day_ms must be finite and >= 0".to_owned(),
        ));
    }
    if !config.min_fling_velocity.is_finite() || config.min_fling_velocity < 0.0 {
        return Err(ChartError::InvalidConfig(
            "min_fling_velocity must be finite and >= 0".to_owned(),
        ));
    }
    if !config.fling_model.is_valid() {
        return Err(ChartError::InvalidConfig(
            "fling model parameters are out of range".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_config;
    use crate::api::DateChartConfig;
    use crate::error::ChartError;
    use crate::interaction::{FlingModel, NavigationConfig};

    #[test]
    fn rejects_single_label_row() {
        let config = DateChartConfig::default().with_horizontal_labels(1);
        assert!(matches!(
            validate_config(&config),
            Err(ChartError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_equal_value_bounds() {
        let config = DateChartConfig::default().with_value_range(5.0, 5.0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_decay_outside_unit_interval() {
        let config = DateChartConfig::default().with_navigation(NavigationConfig {
            fling_model: FlingModel::Exponential {
                decay_per_second: 1.5,
                stop_velocity: 1.0,
            },
            ..NavigationConfig::default()
        });
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&DateChartConfig::default()).is_ok());
    }
}
