use chrono::{NaiveDate, TimeDelta};
use date_chart::api::{DateChartConfig, DateChartEngine, GestureEvent};
use date_chart::core::{ClockSource, DateIndexMapper, Viewport};
use date_chart::interaction::{DirectionLockMode, NavigationConfig};
use date_chart::render::NullRenderer;
use proptest::prelude::*;

fn gesture_strategy() -> impl Strategy<Value = GestureEvent> {
    prop_oneof![
        (0.0f64..358.0, 0.0f64..400.0).prop_map(|(x, y)| GestureEvent::PointerDown { x, y }),
        (-400.0f64..400.0, -100.0f64..100.0).prop_map(|(dx, dy)| GestureEvent::PointerMove {
            dx,
            dy,
            x: 0.0,
            y: 0.0
        }),
        Just(GestureEvent::PointerUp),
        (-5_000.0f64..5_000.0, -500.0f64..500.0)
            .prop_map(|(vx, vy)| GestureEvent::Fling { vx, vy }),
        (0.0f64..358.0, 0.0f64..400.0).prop_map(|(x, y)| GestureEvent::Tap { x, y }),
        (0.0f64..0.5).prop_map(|elapsed_seconds| GestureEvent::AnimationTick { elapsed_seconds }),
    ]
}

fn build_engine(lock: DirectionLockMode) -> DateChartEngine<NullRenderer> {
    let today = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date");
    let config = DateChartConfig::default()
        .with_clock(ClockSource::Fixed(today))
        .with_navigation(NavigationConfig {
            direction_lock: lock,
            ..NavigationConfig::default()
        });
    DateChartEngine::new(NullRenderer::default(), config, Viewport::new(358, 400))
        .expect("engine init")
}

proptest! {
    #[test]
    fn origin_never_goes_negative(
        events in prop::collection::vec(gesture_strategy(), 1..80),
        cumulative in any::<bool>()
    ) {
        let lock = if cumulative {
            DirectionLockMode::Cumulative
        } else {
            DirectionLockMode::FrameLocal
        };
        let mut engine = build_engine(lock);
        for event in events {
            engine.handle_gesture(event);
            let state = engine.navigation_state();
            prop_assert!(state.origin_x >= 0.0);
            prop_assert!(state.start_pixel() <= 1e-9);
            prop_assert!(state.start_pixel() > -state.day_width - 1e-9);
        }
    }

    #[test]
    fn settled_navigation_lands_on_whole_days(
        events in prop::collection::vec(gesture_strategy(), 1..40)
    ) {
        let mut engine = build_engine(DirectionLockMode::FrameLocal);
        engine.handle_gestures(events);
        engine.handle_gesture(GestureEvent::PointerDown { x: 0.0, y: 0.0 });
        for _ in 0..600 {
            if !engine.tick(1.0 / 60.0) {
                break;
            }
        }
        let state = engine.navigation_state();
        prop_assert!(!engine.is_animating());
        let days = state.origin_x / state.day_width;
        prop_assert!((days - days.round()).abs() <= 1e-9);
    }

    #[test]
    fn day_offset_round_trips_through_dates(
        offset in -20_000i64..20_000,
        year in 1970i32..2100,
        ordinal in 1u32..=365
    ) {
        let today = NaiveDate::from_yo_opt(year, ordinal).expect("valid ordinal");
        let date = DateIndexMapper::add_days(today, offset).expect("in range");
        prop_assert_eq!(DateIndexMapper::day_offset_of(today, date), offset);
        prop_assert_eq!(date - today, TimeDelta::try_days(offset).expect("small offset"));
    }
}
