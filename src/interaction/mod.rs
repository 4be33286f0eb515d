//! Gesture-driven navigation over the day axis.
//!
//! `NavigationEngine` is the only writer of the horizontal origin. Direction
//! locking and scroll physics live in their own modules so either can be
//! swapped without touching the state machine.

pub mod direction;
pub mod navigation;
pub mod scroller;

pub use direction::{Direction, DirectionLockMode, lock_cumulative, lock_frame_local};
pub use navigation::{
    MAX_SCROLL_DAYS, NavigationConfig, NavigationEngine, NavigationOutcome, NavigationPhase,
    NavigationState,
};
pub use scroller::{
    ExponentialFling, FlingModel, FrictionFling, ScrollDriver, ScrollTick, SnapScroller,
};
