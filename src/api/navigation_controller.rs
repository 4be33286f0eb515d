use tracing::trace;

use crate::core::DateIndexMapper;
use crate::interaction::{NavigationOutcome, NavigationPhase};
use crate::render::Renderer;

use super::{ChartEventHandler, DateChartEngine};

impl<R: Renderer, H: ChartEventHandler> DateChartEngine<R, H> {
    /// Pointer touched the chart: cancels any animation and snaps from the
    /// current origin right away.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        trace!(x, y, "pointer down");
        let outcome = self.navigation.pointer_down();
        self.apply_outcome(outcome);
    }

    /// Drag step; `dx`/`dy` are previous minus current pointer position.
    pub fn pointer_move(&mut self, dx: f64, dy: f64) {
        let outcome = self.navigation.pointer_move(dx, dy);
        self.apply_outcome(outcome);
    }

    /// Release. A fling detected on the same release must be sent first.
    pub fn pointer_up(&mut self) {
        let outcome = self.navigation.pointer_up();
        self.apply_outcome(outcome);
    }

    /// Fling with velocity in px/s; positive `vx` scrolls into the past.
    pub fn fling(&mut self, vx: f64, vy: f64) {
        let outcome = self.navigation.fling(vx, vy);
        self.apply_outcome(outcome);
    }

    /// Single tap; only taps inside the footer band select a day.
    pub fn tap(&mut self, x: f64, y: f64) {
        let outcome = self.navigation.tap(
            x,
            y,
            self.context.footer_top(),
            self.context.day_offset(),
        );
        self.apply_outcome(outcome);
    }

    /// Advances a running fling or snap. Returns `true` while another tick is needed.
    pub fn tick(&mut self, elapsed_seconds: f64) -> bool {
        let outcome = self.navigation.tick(elapsed_seconds);
        self.apply_outcome(outcome);
        self.navigation.is_animating()
    }

    pub fn stop_animation(&mut self) {
        self.navigation.stop_animation();
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.navigation.is_animating()
    }

    #[must_use]
    pub fn navigation_phase(&self) -> NavigationPhase {
        self.navigation.state().phase
    }

    pub(super) fn apply_outcome(&mut self, outcome: NavigationOutcome) {
        if let Some(days_back) = outcome.selected_days_back {
            let today = self.today();
            if let Some(date) = DateIndexMapper::add_days(today, -days_back) {
                trace!(%date, days_back, "day selected");
                self.handler.on_day_selected(date);
            }
        }
        if outcome.redraw {
            self.request_redraw();
        }
    }
}
