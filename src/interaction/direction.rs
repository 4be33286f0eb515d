use serde::{Deserialize, Serialize};

/// Horizontal direction of the latest drag or fling.
///
/// `Left` moves the window toward today (origin shrinks), `Right` moves it
/// into the past (origin grows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::None
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// How a drag decides which direction is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DirectionLockMode {
    /// Each horizontally dominant motion event locks on the first event and
    /// flips the lock on every later one.
    #[default]
    FrameLocal,
    /// The lock follows the sign of the drag accumulated since pointer down.
    Cumulative,
}

impl DirectionLockMode {
    /// `motion` is this event's `(dx, dy)`, `accumulated` the sum since pointer down.
    #[must_use]
    pub fn resolve(self, current: Direction, motion: (f64, f64), accumulated: (f64, f64)) -> Direction {
        match self {
            Self::FrameLocal => lock_frame_local(current, motion.0, motion.1),
            Self::Cumulative => lock_cumulative(current, accumulated.0, accumulated.1),
        }
    }
}

/// Frame-local lock: a first dominant event locks by the sign of `dx`
/// (`dx > 0` is `Left`); every later dominant event flips the lock whatever
/// its sign.
#[must_use]
pub fn lock_frame_local(current: Direction, dx: f64, dy: f64) -> Direction {
    if dx.abs() <= dy.abs() {
        return current;
    }
    match current {
        Direction::None => direction_of(dx),
        locked => locked.opposite(),
    }
}

#[must_use]
pub fn lock_cumulative(current: Direction, total_dx: f64, total_dy: f64) -> Direction {
    if total_dx.abs() <= total_dy.abs() || total_dx == 0.0 {
        return current;
    }
    direction_of(total_dx)
}

fn direction_of(dx: f64) -> Direction {
    if dx > 0.0 {
        Direction::Left
    } else {
        Direction::Right
    }
}
