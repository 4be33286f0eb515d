use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LayerPrimitives, RenderFrame, Renderer, TextHAlign, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
    pub clipped_layers: usize,
}

/// Renderers that can paint into a host-owned Cairo context, e.g. a GTK
/// draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango backend for chart frames.
///
/// `Renderer::render` paints into an owned offscreen surface;
/// `CairoContextRenderer` paints into an external context.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            if layer.is_empty() {
                continue;
            }
            context
                .save()
                .map_err(|err| map_backend_error("failed to save context", err))?;
            if let Some(clip) = layer.clip {
                append_circle_path(context, clip);
                context.clip();
                stats.clipped_layers += 1;
            }
            let painted = paint_layer(context, layer, &mut stats);
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context", err))?;
            painted?;
        }

        self.last_stats = stats;
        Ok(())
    }
}

fn paint_layer(
    context: &Context,
    layer: &LayerPrimitives,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    for rect in &layer.rects {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        apply_color(context, rect.fill_color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        stats.rects_drawn += 1;
    }

    for circle in &layer.circles {
        append_circle_path(context, *circle);
        apply_color(context, circle.fill_color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        stats.circles_drawn += 1;
    }

    for polygon in &layer.polygons {
        let mut vertices = polygon.points.iter();
        if let Some(&(x, y)) = vertices.next() {
            context.move_to(x, y);
        }
        for &(x, y) in vertices {
            context.line_to(x, y);
        }
        context.close_path();
        apply_color(context, polygon.fill_color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill polygon", err))?;
        stats.polygons_drawn += 1;
    }

    for line in &layer.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for text in &layer.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        let y = match text.v_align {
            TextVAlign::Top => text.y,
            TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
            TextVAlign::Bottom => text.y - f64::from(text_height),
        };

        apply_color(context, text.color);
        context.move_to(x, y);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(())
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_circle_path(context: &Context, circle: CirclePrimitive) {
    context.new_sub_path();
    context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, TAU);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
