use chrono::{Datelike, NaiveDate};
use smallvec::SmallVec;

use crate::core::{DataLine, DataLineStore, DateIndexMapper, ExtraLine, MonthKey};
use crate::interaction::NavigationState;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RectPrimitive,
    RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

use super::RenderContext;

/// Dashes per interior gridline, drawn `0..=DASH_SEGMENTS`.
const DASH_SEGMENTS: u32 = 100;
const DASH_DUTY: f64 = 0.4;
const EXTRA_LABEL_SCALE: f64 = 0.7;

/// Result of one draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub frame: RenderFrame,
    /// Distinct months without loaded data, in the order they were met.
    pub missing_months: SmallVec<[MonthKey; 2]>,
}

/// Pure draw pass: same inputs, same frame.
#[derive(Debug, Clone, Copy)]
pub struct ChartRenderer<'a> {
    pub context: &'a RenderContext,
    pub navigation: NavigationState,
    pub today: NaiveDate,
    pub lines: &'a DataLineStore,
    pub extra_lines: &'a [ExtraLine],
}

impl ChartRenderer<'_> {
    #[must_use]
    pub fn build(&self) -> FrameOutput {
        let mut frame = RenderFrame::new(self.context.viewport());
        self.push_backgrounds(&mut frame);
        self.push_value_grid(&mut frame);
        self.push_extra_lines(&mut frame);
        let missing_months = self.push_days(&mut frame);
        self.push_pointer(&mut frame);
        self.push_selected_day_labels(&mut frame);
        FrameOutput {
            frame,
            missing_months,
        }
    }

    fn selection_circle(&self) -> CirclePrimitive {
        CirclePrimitive::new(
            self.context.center_x(),
            self.context.footer_center_y(),
            self.context.selection_radius(),
            self.context.config().style.selected_day_background_color,
        )
    }

    fn push_backgrounds(&self, frame: &mut RenderFrame) {
        let ctx = self.context;
        let style = &ctx.config().style;
        frame.push_rect(
            CanvasLayerKind::Background,
            RectPrimitive::new(0.0, 0.0, ctx.width(), ctx.footer_top(), style.body_background_color),
        );
        frame.push_rect(
            CanvasLayerKind::Background,
            RectPrimitive::new(
                0.0,
                ctx.footer_top(),
                ctx.width(),
                ctx.config().footer_height,
                style.footer_background_color,
            ),
        );
        frame.push_circle(CanvasLayerKind::Background, self.selection_circle());
    }

    fn push_value_grid(&self, frame: &mut RenderFrame) {
        let ctx = self.context;
        let config = ctx.config();
        if config.middle_line_visible {
            frame.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::new(
                    ctx.center_x(),
                    0.0,
                    ctx.center_x(),
                    ctx.footer_top(),
                    config.middle_line_thickness,
                    config.style.middle_line_color,
                ),
            );
        }

        let rows = ctx.label_rows();
        let scale = ctx.value_scale();
        let dash_step = (ctx.width() - config.label_text_width) / f64::from(DASH_SEGMENTS);
        let dash_width = dash_step * DASH_DUTY;

        for row in 0..rows {
            let y = scale.row_y(row, rows);
            let is_last = row == rows - 1;
            let hide_label = is_last && config.hide_zero_baseline_label && config.min_value == 0.0;
            if !hide_label {
                frame.push_text(
                    CanvasLayerKind::Grid,
                    TextPrimitive::new(
                        format_row_value(scale.row_value(row, rows)),
                        ctx.label_x(),
                        y,
                        config.label_text_size,
                        config.style.label_text_color,
                        TextHAlign::Right,
                    ),
                );
            }

            if row == 0 || is_last || dash_width <= 0.0 {
                continue;
            }
            for segment in 0..=DASH_SEGMENTS {
                let x = f64::from(segment) * dash_step;
                frame.push_line(
                    CanvasLayerKind::Grid,
                    LinePrimitive::new(
                        x,
                        y,
                        x + dash_width,
                        y,
                        config.label_line_thickness,
                        config.style.label_line_color,
                    ),
                );
            }
        }
    }

    fn push_extra_lines(&self, frame: &mut RenderFrame) {
        let ctx = self.context;
        let config = ctx.config();
        let scale = ctx.value_scale();
        for extra in self.extra_lines {
            let y = scale.value_to_y(extra.value);
            frame.push_line(
                CanvasLayerKind::Reference,
                LinePrimitive::new(0.0, y, ctx.label_x(), y, config.label_line_thickness, extra.color),
            );
            if extra.label.is_empty() {
                continue;
            }
            frame.push_text(
                CanvasLayerKind::Reference,
                TextPrimitive::new(
                    extra.label.clone(),
                    ctx.label_x(),
                    y,
                    config.label_text_size * EXTRA_LABEL_SCALE,
                    extra.color,
                    TextHAlign::Right,
                )
                .with_v_align(TextVAlign::Bottom),
            );
        }
    }

    /// Day numbers from the left buffer day to the right buffer day.
    fn rendered_days(&self) -> impl Iterator<Item = (f64, NaiveDate)> + '_ {
        let nav = self.navigation;
        let first = nav.left_days().saturating_sub(self.context.day_offset());
        let last = first.saturating_add(self.context.visible_days() + 1);
        let start = nav.start_pixel();
        let day_width = nav.day_width;
        (first..=last)
            .enumerate()
            .filter_map(move |(column, day_number)| {
                let center_x = start + column as f64 * day_width + day_width / 2.0;
                DateIndexMapper::add_days(self.today, day_number).map(|date| (center_x, date))
            })
    }

    fn push_days(&self, frame: &mut RenderFrame) -> SmallVec<[MonthKey; 2]> {
        let ctx = self.context;
        let config = ctx.config();
        let mut missing: SmallVec<[MonthKey; 2]> = SmallVec::new();

        for (center_x, date) in self.rendered_days() {
            let month = MonthKey::of(date);
            if !self.lines.has_data_for(month) {
                if !missing.contains(&month) {
                    missing.push(month);
                }
            } else {
                for (_, line) in self.lines.lines_for(month) {
                    self.push_day_points(frame, line, date.day(), center_x);
                }
            }

            let color = if DateIndexMapper::is_after(date, self.today) {
                config.style.disabled_day_text_color
            } else {
                config.style.day_text_color
            };
            frame.push_text(
                CanvasLayerKind::DayLabels,
                self.day_label(date, center_x, color),
            );
        }
        missing
    }

    fn push_day_points(&self, frame: &mut RenderFrame, line: &DataLine, day: u32, center_x: f64) {
        let Some(point) = line.point_on_day(day) else {
            return;
        };
        let config = self.context.config();
        let scale = self.context.value_scale();
        let day_width = self.navigation.day_width;
        let y = scale.value_to_y(point.value);

        frame.push_circle(
            CanvasLayerKind::Points,
            CirclePrimitive::new(center_x, y, config.data_point_radius, line.color),
        );

        let neighbours = [
            (day.checked_sub(1), center_x - day_width),
            (day.checked_add(1), center_x + day_width),
        ];
        for (neighbour_day, neighbour_x) in neighbours {
            let Some(neighbour) = neighbour_day.and_then(|d| line.point_on_day(d)) else {
                continue;
            };
            frame.push_line(
                CanvasLayerKind::Series,
                LinePrimitive::new(
                    neighbour_x,
                    scale.value_to_y(neighbour.value),
                    center_x,
                    y,
                    config.data_line_thickness,
                    line.color,
                ),
            );
        }
    }

    fn push_pointer(&self, frame: &mut RenderFrame) {
        let ctx = self.context;
        let config = ctx.config();
        let half_width = (config.day_text_size * 4.0).round() / 2.0;
        let height = (config.day_text_size * 0.25).round();
        if height <= 0.0 || half_width <= 0.0 {
            return;
        }
        let bottom = ctx.height();
        let x = ctx.center_x();
        frame.push_polygon(
            CanvasLayerKind::Pointer,
            PolygonPrimitive::new(
                [(x, bottom - height), (x - half_width, bottom), (x + half_width, bottom)],
                config.style.body_background_color,
            ),
        );
    }

    fn push_selected_day_labels(&self, frame: &mut RenderFrame) {
        frame.set_clip(CanvasLayerKind::SelectedDay, self.selection_circle());
        let color = self.context.config().style.selected_day_text_color;
        for (center_x, date) in self.rendered_days() {
            frame.push_text(
                CanvasLayerKind::SelectedDay,
                self.day_label(date, center_x, color),
            );
        }
    }

    fn day_label(&self, date: NaiveDate, center_x: f64, color: Color) -> TextPrimitive {
        TextPrimitive::new(
            date.day().to_string(),
            center_x,
            self.context.footer_center_y(),
            self.context.config().day_text_size,
            color,
            TextHAlign::Center,
        )
    }
}

fn format_row_value(value: f64) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        format!("{rounded:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_row_value;

    #[test]
    fn row_values_print_as_integers() {
        assert_eq!(format_row_value(100.0), "100");
        assert_eq!(format_row_value(33.4), "33");
        assert_eq!(format_row_value(-0.2), "0");
        assert_eq!(format_row_value(-12.6), "-13");
    }
}
