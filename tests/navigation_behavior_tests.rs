use chrono::{NaiveDate, TimeDelta};
use date_chart::api::{ChartEvent, ChartEventQueue, DateChartConfig, DateChartEngine, GestureEvent};
use date_chart::core::{ClockSource, Viewport};
use date_chart::interaction::{Direction, MAX_SCROLL_DAYS, NavigationPhase};
use date_chart::render::NullRenderer;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 18).expect("valid date")
}

fn build_engine() -> DateChartEngine<NullRenderer, ChartEventQueue> {
    let config = DateChartConfig::default().with_clock(ClockSource::Fixed(today()));
    DateChartEngine::with_handler(
        NullRenderer::default(),
        ChartEventQueue::new().with_redraws(),
        config,
        Viewport::new(358, 400),
    )
    .expect("engine init")
}

fn days_back(days: i64) -> NaiveDate {
    today() - TimeDelta::try_days(days).expect("small offset")
}

fn run_animation(engine: &mut DateChartEngine<NullRenderer, ChartEventQueue>) {
    for _ in 0..2_000 {
        if !engine.tick(1.0 / 60.0) {
            return;
        }
    }
    panic!("animation never settled");
}

#[test]
fn drag_into_the_past_settles_on_whole_day() {
    let mut engine = build_engine();
    engine.pointer_down(100.0, 100.0);
    engine.handler_mut().drain();

    engine.pointer_move(-500.0, 0.0);
    assert_eq!(engine.navigation_state().scroll_direction, Direction::Right);
    assert_eq!(engine.navigation_state().origin_x, 500.0);

    engine.pointer_up();
    let state = engine.navigation_state();
    assert_eq!(state.origin_x, 500.0);
    assert_eq!(state.scroll_direction, Direction::None);
    assert_eq!(state.phase, NavigationPhase::Idle);
    assert_eq!(engine.handler().selected_days(), vec![days_back(10)]);
    assert_eq!(engine.centered_date(), days_back(10));
}

#[test]
fn right_drag_rounds_partial_day_up() {
    let mut engine = build_engine();
    engine.pointer_down(100.0, 100.0);
    engine.handler_mut().drain();

    engine.pointer_move(-110.0, 0.0);
    engine.pointer_up();
    assert_eq!(engine.handler().selected_days(), vec![days_back(3)]);
    assert_eq!(engine.navigation_phase(), NavigationPhase::Snapping);

    run_animation(&mut engine);
    assert_eq!(engine.navigation_state().origin_x, 150.0);
    assert_eq!(engine.navigation_phase(), NavigationPhase::Idle);
}

#[test]
fn fling_snaps_and_selects_exactly_once() {
    let mut engine = build_engine();
    engine.pointer_down(100.0, 100.0);
    engine.handler_mut().drain();

    engine.pointer_move(-120.0, 0.0);
    engine.fling(600.0, 0.0);
    engine.pointer_up();
    assert!(engine.is_animating());
    assert_eq!(engine.navigation_phase(), NavigationPhase::Flinging);
    assert!(engine.handler().selected_days().is_empty());

    run_animation(&mut engine);

    let selected = engine.handler().selected_days();
    assert_eq!(selected.len(), 1);
    let state = engine.navigation_state();
    assert_eq!(state.phase, NavigationPhase::Idle);
    assert_eq!(state.fling_direction, Direction::None);
    assert!(state.origin_x > 120.0);
    assert_eq!(state.origin_x % state.day_width, 0.0);
    let settled_days = (state.origin_x / state.day_width) as i64;
    assert_eq!(selected[0], days_back(settled_days));
}

#[test]
fn tap_in_footer_selects_day_right_of_center() {
    let mut engine = build_engine();
    engine.handle_gestures([
        GestureEvent::PointerDown { x: 10.0, y: 10.0 },
        GestureEvent::PointerMove {
            dx: -500.0,
            dy: 0.0,
            x: 510.0,
            y: 10.0,
        },
        GestureEvent::PointerUp,
    ]);
    engine.handler_mut().drain();

    let center = engine.render_context().center_x();
    engine.tap(center + 100.0, 300.0);
    assert_eq!(engine.handler().selected_days(), vec![days_back(8)]);

    run_animation(&mut engine);
    assert_eq!(engine.navigation_state().origin_x, 400.0);
    assert_eq!(engine.centered_date(), days_back(8));
}

#[test]
fn tap_above_footer_is_ignored() {
    let mut engine = build_engine();
    engine.handler_mut().drain();
    engine.tap(179.0, 100.0);
    assert!(engine.handler().events().is_empty());
}

#[test]
fn tap_on_future_day_clamps_to_today() {
    let mut engine = build_engine();
    engine.handler_mut().drain();
    engine.tap(350.0, 390.0);
    assert_eq!(engine.handler().selected_days(), vec![today()]);
    assert!(!engine.is_animating());
}

#[test]
fn drag_past_today_clamps_without_redraw() {
    let mut engine = build_engine();
    engine.pointer_down(100.0, 100.0);
    engine.handler_mut().drain();

    engine.pointer_move(30.0, 0.0);
    assert_eq!(engine.navigation_state().origin_x, 0.0);
    assert!(
        !engine
            .handler()
            .events()
            .contains(&ChartEvent::RedrawRequested)
    );
}

#[test]
fn pointer_down_cancels_fling_and_snaps_immediately() {
    let mut engine = build_engine();
    engine.pointer_move(-120.0, 0.0);
    engine.fling(2_000.0, 0.0);
    engine.tick(0.05);
    assert!(engine.is_animating());
    engine.handler_mut().drain();

    engine.pointer_down(100.0, 100.0);
    let state = engine.navigation_state();
    assert_eq!(state.fling_direction, Direction::None);
    assert_eq!(engine.handler().selected_days().len(), 1);

    run_animation(&mut engine);
    let state = engine.navigation_state();
    assert_eq!(state.origin_x % state.day_width, 0.0);
}

#[test]
fn vertical_drag_keeps_direction_unlocked() {
    let mut engine = build_engine();
    engine.pointer_down(100.0, 100.0);
    engine.pointer_move(-5.0, 40.0);
    assert_eq!(engine.navigation_state().scroll_direction, Direction::None);
    assert_eq!(engine.navigation_state().origin_x, 5.0);
}

#[test]
fn stop_animation_freezes_origin() {
    let mut engine = build_engine();
    engine.pointer_move(-120.0, 0.0);
    engine.fling(2_000.0, 0.0);
    engine.tick(0.05);
    let origin = engine.navigation_state().origin_x;

    engine.stop_animation();
    assert!(!engine.is_animating());
    assert!(!engine.tick(0.05));
    assert_eq!(engine.navigation_state().origin_x, origin);
}

#[test]
fn extreme_drag_and_fling_still_render() {
    let mut engine = build_engine();
    engine.pointer_down(100.0, 100.0);
    engine.pointer_move(-1e300, 0.0);
    engine.render().expect("render after huge drag");

    let state = engine.navigation_state();
    assert_eq!(state.origin_x, MAX_SCROLL_DAYS as f64 * state.day_width);
    assert!(engine.centered_date() < today());

    engine.fling(1e300, 0.0);
    for _ in 0..10 {
        engine.tick(1.0 / 60.0);
    }
    engine.render().expect("render after huge fling");
    engine.pointer_up();
    engine.tap(-1e300, 390.0);
    engine.render().expect("render after far tap");
    assert_eq!(engine.renderer().frames_rendered, 3);
}

#[test]
fn resize_during_snap_still_selects_a_whole_day() {
    let mut engine = build_engine();
    engine.pointer_down(100.0, 100.0);
    engine.pointer_move(-110.0, 0.0);
    engine.pointer_up();
    engine.tick(0.05);
    assert!(engine.is_animating());
    engine.handler_mut().drain();

    engine.resize(Viewport::new(715, 400)).expect("resize");
    assert_eq!(engine.handler().selected_days(), vec![days_back(3)]);

    run_animation(&mut engine);
    let state = engine.navigation_state();
    assert_eq!(state.day_width, 101.0);
    assert_eq!(state.origin_x, 303.0);
}
