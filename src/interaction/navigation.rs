use serde::{Deserialize, Serialize};
use tracing::trace;

use super::direction::{Direction, DirectionLockMode};
use super::scroller::{FlingModel, ScrollDriver, SnapScroller};

/// Tuning of drag, fling and snap behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Multiplier applied to drag distance and fling velocity.
    pub scroll_speed: f64,
    /// Snap animation duration per day of travel, in milliseconds.
    pub snap_duration_per_day_ms: f64,
    /// Flings slower than this (px/s) are cut short by a nearest-day snap.
    pub min_fling_velocity: f64,
    pub fling_model: FlingModel,
    pub direction_lock: DirectionLockMode,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_speed: 1.0,
            snap_duration_per_day_ms: 250.0,
            min_fling_velocity: 50.0,
            fling_model: FlingModel::default(),
            direction_lock: DirectionLockMode::FrameLocal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavigationPhase {
    #[default]
    Idle,
    Dragging,
    Flinging,
    /// Origin is easing toward a whole-day position.
    Snapping,
}

/// Public navigation state.
///
/// `origin_x` is the pixel distance of the window from the today anchor and
/// is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    pub origin_x: f64,
    pub day_width: f64,
    pub scroll_direction: Direction,
    pub fling_direction: Direction,
    pub phase: NavigationPhase,
}

impl NavigationState {
    /// Signed day offset of the leftmost fully scrolled day, `-ceil(origin / dayWidth)`.
    #[must_use]
    pub fn left_days(self) -> i64 {
        -((self.origin_x / self.day_width).ceil() as i64)
    }

    /// Pixel where the day at `left_days` starts; always in `(-dayWidth, 0]`.
    #[must_use]
    pub fn start_pixel(self) -> f64 {
        self.origin_x + self.day_width * self.left_days() as f64
    }
}

/// What a transition asks the host side to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationOutcome {
    /// Days back from today that became the centered day, if a selection settled.
    pub selected_days_back: Option<i64>,
    pub redraw: bool,
}

impl NavigationOutcome {
    const NONE: Self = Self {
        selected_days_back: None,
        redraw: false,
    };

    const REDRAW: Self = Self {
        selected_days_back: None,
        redraw: true,
    };

    fn merge(self, other: Self) -> Self {
        Self {
            selected_days_back: other.selected_days_back.or(self.selected_days_back),
            redraw: self.redraw || other.redraw,
        }
    }
}

/// Drag/fling/snap state machine over the horizontal origin.
///
/// Owns at most one animation driver; every new gesture cancels the current
/// one before applying its own motion.
#[derive(Debug)]
pub struct NavigationEngine {
    state: NavigationState,
    config: NavigationConfig,
    driver: Option<Box<dyn ScrollDriver>>,
    drag_total: (f64, f64),
}

impl NavigationEngine {
    /// `day_width` must be positive; callers get it from a validated render context.
    #[must_use]
    pub fn new(day_width: f64, config: NavigationConfig) -> Self {
        Self {
            state: NavigationState {
                origin_x: 0.0,
                day_width,
                scroll_direction: Direction::None,
                fling_direction: Direction::None,
                phase: NavigationPhase::Idle,
            },
            config,
            driver: None,
            drag_total: (0.0, 0.0),
        }
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> NavigationConfig {
        self.config
    }

    pub fn set_config(&mut self, config: NavigationConfig) {
        self.config = config;
    }

    /// Rescales the origin so the same day stays under the window after a resize.
    ///
    /// A fling or snap cut short by the resize is replaced by a fresh snap, so
    /// the chart still settles on a whole day.
    pub fn set_day_width(&mut self, day_width: f64) -> NavigationOutcome {
        if day_width == self.state.day_width {
            return NavigationOutcome::NONE;
        }
        let days = self.state.origin_x / self.state.day_width;
        let was_animating = self.is_animating();
        self.stop_animation();
        self.state.day_width = day_width;
        self.state.origin_x = self.clamp_origin(days * day_width);
        if was_animating {
            return self.go_to_nearest_day();
        }
        NavigationOutcome::REDRAW
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_some()
    }

    /// Cancels any in-flight fling or snap and leaves the origin where it is.
    pub fn stop_animation(&mut self) {
        if self.driver.take().is_some() {
            trace!(origin_x = self.state.origin_x, "scroll animation cancelled");
        }
        if matches!(
            self.state.phase,
            NavigationPhase::Flinging | NavigationPhase::Snapping
        ) {
            self.state.phase = NavigationPhase::Idle;
        }
    }

    pub fn pointer_down(&mut self) -> NavigationOutcome {
        self.stop_animation();
        self.drag_total = (0.0, 0.0);
        self.go_to_nearest_day()
    }

    /// `dx`/`dy` follow the scroll-distance convention: previous minus current
    /// pointer position, so `dx > 0` pulls the window toward today.
    pub fn pointer_move(&mut self, dx: f64, dy: f64) -> NavigationOutcome {
        if !dx.is_finite() || !dy.is_finite() {
            trace!(dx, dy, "ignoring non-finite drag");
            return NavigationOutcome::NONE;
        }
        self.driver = None;
        self.drag_total.0 += dx;
        self.drag_total.1 += dy;
        self.state.scroll_direction =
            self.config
                .direction_lock
                .resolve(self.state.scroll_direction, (dx, dy), self.drag_total);
        self.state.phase = NavigationPhase::Dragging;

        let origin_x = self.state.origin_x - dx * self.config.scroll_speed;
        if origin_x < 0.0 {
            self.state.origin_x = 0.0;
            return NavigationOutcome::NONE;
        }
        self.state.origin_x = self.clamp_origin(origin_x);
        NavigationOutcome::REDRAW
    }

    pub fn pointer_up(&mut self) -> NavigationOutcome {
        let mut outcome = NavigationOutcome::NONE;
        if self.state.fling_direction.is_none() {
            if !self.state.scroll_direction.is_none() {
                outcome = self.go_to_nearest_day();
            }
            self.state.scroll_direction = Direction::None;
            if self.state.phase == NavigationPhase::Dragging {
                self.state.phase = NavigationPhase::Idle;
            }
        }
        outcome
    }

    /// Starts a fling; `vx > 0` moves the window into the past.
    pub fn fling(&mut self, vx: f64, _vy: f64) -> NavigationOutcome {
        if !vx.is_finite() {
            trace!(vx, "ignoring non-finite fling");
            return NavigationOutcome::NONE;
        }
        self.driver = None;
        self.state.fling_direction = self.state.scroll_direction;
        let velocity = vx * self.config.scroll_speed;
        self.driver = Some(self.config.fling_model.launch(self.state.origin_x, velocity));
        self.state.phase = NavigationPhase::Flinging;
        trace!(
            velocity,
            direction = ?self.state.fling_direction,
            "fling started"
        );
        NavigationOutcome::REDRAW
    }

    /// Selects the day under `x` when the tap lands in the footer band
    /// (`y >= footer_top`). `day_offset` is the number of days left of center.
    pub fn tap(&mut self, x: f64, y: f64, footer_top: f64, day_offset: i64) -> NavigationOutcome {
        if !x.is_finite() || !y.is_finite() || y < footer_top {
            return NavigationOutcome::NONE;
        }
        let raw = (((self.state.origin_x - x) / self.state.day_width).ceil() as i64)
            .saturating_add(day_offset);
        let days_back = raw.clamp(0, MAX_SCROLL_DAYS);
        trace!(x, days_back, "footer tap");
        self.settle_on(days_back)
    }

    /// Advances the active animation by `delta_seconds`.
    pub fn tick(&mut self, delta_seconds: f64) -> NavigationOutcome {
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            return NavigationOutcome::NONE;
        }
        let Some(driver) = self.driver.as_mut() else {
            return NavigationOutcome::NONE;
        };
        let step = driver.tick(delta_seconds);

        if step.finished {
            self.driver = None;
            self.state.origin_x = self.clamp_origin(step.position);
            self.state.phase = NavigationPhase::Idle;
            if self.state.fling_direction.is_none() {
                return NavigationOutcome::REDRAW;
            }
            trace!(origin_x = self.state.origin_x, "fling finished, snapping");
            return NavigationOutcome::REDRAW.merge(self.go_to_nearest_day());
        }

        if !self.state.fling_direction.is_none()
            && step.velocity.abs() <= self.config.min_fling_velocity
        {
            trace!(velocity = step.velocity, "fling below minimum velocity, snapping");
            return self.go_to_nearest_day();
        }

        self.state.origin_x = self.clamp_origin(step.position);
        NavigationOutcome::REDRAW
    }

    /// Snaps to the closest whole day using the gesture-dependent rounding.
    pub fn go_to_nearest_day(&mut self) -> NavigationOutcome {
        let days = self.state.origin_x / self.state.day_width;
        let rounded = if !self.state.fling_direction.is_none() {
            days.round()
        } else {
            match self.state.scroll_direction {
                Direction::Left => days.floor(),
                Direction::Right => days.ceil(),
                Direction::None => days.round(),
            }
        };
        self.settle_on((rounded as i64).clamp(0, MAX_SCROLL_DAYS))
    }

    /// Keeps the origin between today and the oldest reachable day.
    fn clamp_origin(&self, origin_x: f64) -> f64 {
        if origin_x.is_nan() {
            return self.state.origin_x;
        }
        origin_x.clamp(0.0, MAX_SCROLL_DAYS as f64 * self.state.day_width)
    }

    fn settle_on(&mut self, days_back: i64) -> NavigationOutcome {
        self.driver = None;
        let target = days_back as f64 * self.state.day_width;
        let distance = target - self.state.origin_x;

        if distance.abs() >= SNAP_EPSILON_PX {
            let duration_seconds = distance.abs() / self.state.day_width
                * self.config.snap_duration_per_day_ms
                / 1000.0;
            let mut snap = SnapScroller::new(target, duration_seconds);
            snap.start(self.state.origin_x, 0.0);
            self.driver = Some(Box::new(snap));
            self.state.phase = NavigationPhase::Snapping;
            trace!(target, duration_seconds, "snap started");
        } else {
            self.state.origin_x = target;
            self.state.phase = NavigationPhase::Idle;
        }

        self.state.scroll_direction = Direction::None;
        self.state.fling_direction = Direction::None;
        NavigationOutcome {
            selected_days_back: Some(days_back),
            redraw: true,
        }
    }
}

/// Offsets closer than this to a day boundary are aligned without animation.
const SNAP_EPSILON_PX: f64 = 0.5;

/// Oldest reachable day, in days back from today. About 100,000 years, well
/// inside the calendar range `chrono` can represent.
pub const MAX_SCROLL_DAYS: i64 = 36_500_000;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{MAX_SCROLL_DAYS, NavigationConfig, NavigationEngine, NavigationPhase};
    use crate::interaction::Direction;

    fn engine() -> NavigationEngine {
        NavigationEngine::new(50.0, NavigationConfig::default())
    }

    fn run_until_idle(engine: &mut NavigationEngine) {
        for _ in 0..10_000 {
            if !engine.is_animating() {
                return;
            }
            engine.tick(1.0 / 60.0);
        }
        panic!("animation did not settle");
    }

    #[test]
    fn drag_toward_future_clamps_at_today() {
        let mut nav = engine();
        let outcome = nav.pointer_move(30.0, 0.0);
        assert_eq!(nav.state().origin_x, 0.0);
        assert!(!outcome.redraw);
        assert_eq!(nav.state().phase, NavigationPhase::Dragging);
    }

    #[test]
    fn left_drag_release_rounds_down() {
        let mut nav = engine();
        nav.pointer_move(-120.0, 0.0);
        assert_eq!(nav.state().scroll_direction, Direction::Right);
        nav.pointer_move(10.0, 0.0);
        // frame-local flip: the second dominant event flips Right to Left
        assert_eq!(nav.state().scroll_direction, Direction::Left);
        assert_relative_eq!(nav.state().origin_x, 110.0);

        let outcome = nav.pointer_up();
        assert_eq!(outcome.selected_days_back, Some(2));
        assert_eq!(nav.state().scroll_direction, Direction::None);
        run_until_idle(&mut nav);
        assert_relative_eq!(nav.state().origin_x, 100.0);
    }

    #[test]
    fn right_drag_release_rounds_up() {
        let mut nav = engine();
        nav.pointer_move(-60.0, 0.0);
        let outcome = nav.pointer_up();
        assert_eq!(outcome.selected_days_back, Some(2));
        run_until_idle(&mut nav);
        assert_relative_eq!(nav.state().origin_x, 100.0);
        assert_eq!(nav.state().phase, NavigationPhase::Idle);
    }

    #[test]
    fn release_without_locked_direction_does_not_snap() {
        let mut nav = engine();
        nav.pointer_move(0.0, 10.0);
        assert_eq!(nav.pointer_up().selected_days_back, None);
    }

    #[test]
    fn aligned_pointer_down_selects_without_animation() {
        let mut nav = engine();
        let outcome = nav.pointer_down();
        assert_eq!(outcome.selected_days_back, Some(0));
        assert!(!nav.is_animating());
        assert_eq!(nav.state().phase, NavigationPhase::Idle);
    }

    #[test]
    fn footer_tap_outside_band_is_ignored() {
        let mut nav = engine();
        assert_eq!(nav.tap(10.0, 5.0, 100.0, 3), Default::default());
    }

    #[test]
    fn resize_during_snap_settles_on_new_day_width() {
        let mut nav = engine();
        nav.pointer_move(-110.0, 0.0);
        nav.pointer_up();
        nav.tick(0.05);
        assert!(nav.is_animating());
        assert_relative_eq!(nav.state().origin_x, 127.5);

        let outcome = nav.set_day_width(100.0);
        assert_eq!(outcome.selected_days_back, Some(3));
        assert_eq!(nav.state().phase, NavigationPhase::Snapping);
        run_until_idle(&mut nav);
        assert_relative_eq!(nav.state().origin_x, 300.0);
    }

    #[test]
    fn huge_drag_stops_at_oldest_reachable_day() {
        let mut nav = engine();
        nav.pointer_move(-1e300, 0.0);
        assert_relative_eq!(nav.state().origin_x, MAX_SCROLL_DAYS as f64 * 50.0);
        assert_eq!(nav.state().left_days(), -MAX_SCROLL_DAYS);

        let outcome = nav.tap(-1e300, 10.0, 0.0, 3);
        assert_eq!(outcome.selected_days_back, Some(MAX_SCROLL_DAYS));
    }

    #[test]
    fn resize_keeps_fractional_day_position() {
        let mut nav = engine();
        nav.pointer_move(-75.0, 0.0);
        nav.set_day_width(100.0);
        assert_relative_eq!(nav.state().origin_x, 150.0);
    }
}
