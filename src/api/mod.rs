//! Public chart facade and its collaborators.
//!
//! `DateChartEngine` wires the navigation state machine, the data store and
//! the draw pass together; everything a host touches goes through it.

mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod events;
mod gesture_controller;
mod navigation_controller;
mod render_context;
mod render_frame_builder;
mod validation;

pub use engine::DateChartEngine;
pub use engine_config::{ChartStyle, DateChartConfig};
pub use engine_snapshot::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1,
};
pub use events::{ChartEvent, ChartEventHandler, ChartEventQueue, NoopEventHandler};
pub use gesture_controller::{GestureEvent, PointerTracker};
pub use render_context::RenderContext;
pub use render_frame_builder::{ChartRenderer, FrameOutput};
