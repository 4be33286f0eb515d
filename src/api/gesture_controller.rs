use serde::{Deserialize, Serialize};

use crate::render::Renderer;

use super::{ChartEventHandler, DateChartEngine};

/// Decoded input delivered by the host's gesture recognizer and frame clock.
///
/// Order on release: `Fling` (if any) or `Tap` (if any) first, then `PointerUp`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    PointerDown { x: f64, y: f64 },
    /// `dx`/`dy` are previous minus current position; `x`/`y` the current position.
    PointerMove { dx: f64, dy: f64, x: f64, y: f64 },
    PointerUp,
    Fling { vx: f64, vy: f64 },
    Tap { x: f64, y: f64 },
    AnimationTick { elapsed_seconds: f64 },
}

impl<R: Renderer, H: ChartEventHandler> DateChartEngine<R, H> {
    /// Routes one input event to the navigation state machine.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::PointerDown { x, y } => self.pointer_down(x, y),
            GestureEvent::PointerMove { dx, dy, .. } => self.pointer_move(dx, dy),
            GestureEvent::PointerUp => self.pointer_up(),
            GestureEvent::Fling { vx, vy } => self.fling(vx, vy),
            GestureEvent::Tap { x, y } => self.tap(x, y),
            GestureEvent::AnimationTick { elapsed_seconds } => {
                self.tick(elapsed_seconds);
            }
        }
    }

    pub fn handle_gestures(&mut self, events: impl IntoIterator<Item = GestureEvent>) {
        for event in events {
            self.handle_gesture(event);
        }
    }
}

/// Turns absolute pointer positions into `GestureEvent`s.
///
/// Hosts that only get raw positions feed them here instead of computing
/// scroll distances themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    last: Option<(f64, f64)>,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn down(&mut self, x: f64, y: f64) -> GestureEvent {
        self.last = Some((x, y));
        GestureEvent::PointerDown { x, y }
    }

    /// `None` when no pointer is down.
    pub fn moved(&mut self, x: f64, y: f64) -> Option<GestureEvent> {
        let (last_x, last_y) = self.last?;
        self.last = Some((x, y));
        Some(GestureEvent::PointerMove {
            dx: last_x - x,
            dy: last_y - y,
            x,
            y,
        })
    }

    pub fn up(&mut self) -> GestureEvent {
        self.last = None;
        GestureEvent::PointerUp
    }
}
