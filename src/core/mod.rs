pub mod calendar;
pub mod data_line;
pub mod primitives;
pub mod types;
pub mod value_scale;

pub use calendar::{ClockSource, DateIndexMapper, MonthKey};
pub use data_line::{DataLine, DataLineStore, DataPoint, ExtraLine, PointMatch};
pub use types::Viewport;
pub use value_scale::ValueScale;
