use std::fmt;

use serde::{Deserialize, Serialize};

/// One animation step reported by a [`ScrollDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollTick {
    pub position: f64,
    pub velocity: f64,
    pub finished: bool,
}

/// Animation source for the horizontal origin.
///
/// Drivers are advanced by the host frame clock; they never run on their own.
pub trait ScrollDriver: fmt::Debug {
    /// Restarts the driver from `position` with signed `velocity` in px/s.
    fn start(&mut self, position: f64, velocity: f64);

    /// Advances by `delta_seconds` and reports the new position.
    fn tick(&mut self, delta_seconds: f64) -> ScrollTick;

    fn is_finished(&self) -> bool;
}

/// Fling deceleration model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlingModel {
    /// Velocity multiplied by `decay_per_second^dt` every step; finishes once
    /// `|velocity| < stop_velocity`.
    Exponential {
        decay_per_second: f64,
        stop_velocity: f64,
    },
    /// Constant deceleration in px/s^2; finishes when velocity reaches zero.
    Friction { deceleration: f64 },
}

impl Default for FlingModel {
    fn default() -> Self {
        Self::Exponential {
            decay_per_second: 0.05,
            stop_velocity: 1.0,
        }
    }
}

impl FlingModel {
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Self::Exponential {
                decay_per_second,
                stop_velocity,
            } => {
                decay_per_second.is_finite()
                    && decay_per_second > 0.0
                    && decay_per_second < 1.0
                    && stop_velocity.is_finite()
                    && stop_velocity > 0.0
            }
            Self::Friction { deceleration } => deceleration.is_finite() && deceleration > 0.0,
        }
    }

    /// Builds a started driver for this model.
    #[must_use]
    pub fn launch(self, position: f64, velocity: f64) -> Box<dyn ScrollDriver> {
        let mut driver: Box<dyn ScrollDriver> = match self {
            Self::Exponential {
                decay_per_second,
                stop_velocity,
            } => Box::new(ExponentialFling::new(decay_per_second, stop_velocity)),
            Self::Friction { deceleration } => Box::new(FrictionFling::new(deceleration)),
        };
        driver.start(position, velocity);
        driver
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFling {
    decay_per_second: f64,
    stop_velocity: f64,
    position: f64,
    velocity: f64,
    finished: bool,
}

impl ExponentialFling {
    #[must_use]
    pub fn new(decay_per_second: f64, stop_velocity: f64) -> Self {
        Self {
            decay_per_second,
            stop_velocity,
            position: 0.0,
            velocity: 0.0,
            finished: true,
        }
    }
}

impl ScrollDriver for ExponentialFling {
    fn start(&mut self, position: f64, velocity: f64) {
        self.position = position;
        self.velocity = velocity;
        self.finished = velocity.abs() < self.stop_velocity;
    }

    fn tick(&mut self, delta_seconds: f64) -> ScrollTick {
        if !self.finished {
            self.position += self.velocity * delta_seconds;
            self.velocity *= self.decay_per_second.powf(delta_seconds);
            if self.velocity.abs() < self.stop_velocity {
                self.velocity = 0.0;
                self.finished = true;
            }
        }
        ScrollTick {
            position: self.position,
            velocity: self.velocity,
            finished: self.finished,
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionFling {
    deceleration: f64,
    position: f64,
    velocity: f64,
}

impl FrictionFling {
    #[must_use]
    pub fn new(deceleration: f64) -> Self {
        Self {
            deceleration,
            position: 0.0,
            velocity: 0.0,
        }
    }
}

impl ScrollDriver for FrictionFling {
    fn start(&mut self, position: f64, velocity: f64) {
        self.position = position;
        self.velocity = velocity;
    }

    fn tick(&mut self, delta_seconds: f64) -> ScrollTick {
        if self.velocity != 0.0 {
            let speed = self.velocity.abs();
            let stop_after = speed / self.deceleration;
            let dt = delta_seconds.min(stop_after);
            let next_speed = speed - self.deceleration * dt;
            let travel = (speed + next_speed) * 0.5 * dt;
            self.position += travel * self.velocity.signum();
            self.velocity = if next_speed <= 0.0 {
                0.0
            } else {
                next_speed * self.velocity.signum()
            };
        }
        ScrollTick {
            position: self.position,
            velocity: self.velocity,
            finished: self.velocity == 0.0,
        }
    }

    fn is_finished(&self) -> bool {
        self.velocity == 0.0
    }
}

/// Eased move to a fixed target over a fixed duration.
///
/// Uses a quadratic decelerate curve: fast start, settles on the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapScroller {
    from: f64,
    target: f64,
    duration_seconds: f64,
    elapsed_seconds: f64,
}

impl SnapScroller {
    #[must_use]
    pub fn new(target: f64, duration_seconds: f64) -> Self {
        Self {
            from: target,
            target,
            duration_seconds: duration_seconds.max(0.0),
            elapsed_seconds: 0.0,
        }
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl ScrollDriver for SnapScroller {
    fn start(&mut self, position: f64, _velocity: f64) {
        self.from = position;
        self.elapsed_seconds = 0.0;
    }

    fn tick(&mut self, delta_seconds: f64) -> ScrollTick {
        self.elapsed_seconds += delta_seconds;
        if self.is_finished() {
            return ScrollTick {
                position: self.target,
                velocity: 0.0,
                finished: true,
            };
        }
        let t = self.elapsed_seconds / self.duration_seconds;
        let remaining = 1.0 - t;
        let distance = self.target - self.from;
        ScrollTick {
            position: self.from + distance * (1.0 - remaining * remaining),
            velocity: distance * 2.0 * remaining / self.duration_seconds,
            finished: false,
        }
    }

    fn is_finished(&self) -> bool {
        self.duration_seconds <= 0.0 || self.elapsed_seconds >= self.duration_seconds
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{ExponentialFling, FlingModel, FrictionFling, ScrollDriver, SnapScroller};

    #[test]
    fn exponential_fling_moves_and_decays() {
        let mut fling = ExponentialFling::new(0.5, 0.01);
        fling.start(100.0, 20.0);
        let tick = fling.tick(1.0);
        assert_relative_eq!(tick.position, 120.0);
        assert_relative_eq!(tick.velocity, 10.0);
        assert!(!tick.finished);
    }

    #[test]
    fn zero_velocity_fling_is_finished_immediately() {
        let mut driver = FlingModel::default().launch(40.0, 0.0);
        assert!(driver.is_finished());
        let tick = driver.tick(0.016);
        assert!(tick.finished);
        assert_relative_eq!(tick.position, 40.0);
    }

    #[test]
    fn friction_fling_stops_at_kinematic_distance() {
        let mut fling = FrictionFling::new(100.0);
        fling.start(0.0, -200.0);
        let mut tick = fling.tick(0.5);
        assert!(!tick.finished);
        while !tick.finished {
            tick = fling.tick(0.5);
        }
        // v^2 / 2a
        assert_relative_eq!(tick.position, -200.0);
    }

    #[test]
    fn snap_eases_onto_target() {
        let mut snap = SnapScroller::new(50.0, 0.25);
        snap.start(0.0, 0.0);
        let mid = snap.tick(0.125);
        assert!(!mid.finished);
        assert!(mid.position > 25.0 && mid.position < 50.0);
        let end = snap.tick(0.125);
        assert!(end.finished);
        assert_relative_eq!(end.position, 50.0);
    }
}
