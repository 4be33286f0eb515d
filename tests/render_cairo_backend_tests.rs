#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chrono::NaiveDate;
use date_chart::ChartError;
use date_chart::api::{DateChartConfig, DateChartEngine};
use date_chart::core::{ClockSource, DataLine, DataPoint, Viewport};
use date_chart::render::{CairoContextRenderer, CairoRenderer, Color};

fn build_engine() -> DateChartEngine<CairoRenderer> {
    let today = NaiveDate::from_ymd_opt(2024, 6, 18).expect("valid date");
    let renderer = CairoRenderer::new(358, 400).expect("renderer");
    let mut engine = DateChartEngine::new(
        renderer,
        DateChartConfig::default().with_clock(ClockSource::Fixed(today)),
        Viewport::new(358, 400),
    )
    .expect("engine init");
    engine.add_lines([DataLine::new(
        2024,
        5,
        vec![DataPoint::new(16, 40.0), DataPoint::new(17, 60.0)],
        Color::CYAN,
    )
    .expect("line")]);
    engine
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 400).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_paints_every_layer() {
    let mut engine = build_engine();
    engine.render().expect("render");
    let stats = engine.into_renderer().last_stats();

    assert_eq!(stats.rects_drawn, 2);
    assert_eq!(stats.polygons_drawn, 1);
    assert_eq!(stats.clipped_layers, 1);
    assert_eq!(stats.circles_drawn, 3);
    assert_eq!(stats.texts_drawn, 3 + 9 + 9);
    assert!(stats.lines_drawn >= 101 + 1);
}

#[test]
fn cairo_renderer_paints_into_external_context() {
    let mut engine = build_engine();
    let frame = engine.build_render_frame().expect("frame");

    let surface = ImageSurface::create(Format::ARgb32, 358, 400).expect("surface");
    let context = Context::new(&surface).expect("context");
    let mut renderer = CairoRenderer::new(1, 1).expect("renderer");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");
    assert_eq!(renderer.last_stats().texts_drawn, frame.text_count());
}
