use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{MonthKey, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{Direction, NavigationPhase};
use crate::render::Renderer;

use super::{ChartEventHandler, DateChartEngine};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of the engine state for debugging and regression tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub today: NaiveDate,
    pub centered_date: NaiveDate,
    pub origin_x: f64,
    pub day_width: f64,
    pub left_days: i64,
    pub scroll_direction: Direction,
    pub fling_direction: Direction,
    pub phase: NavigationPhase,
    pub animating: bool,
    pub loaded_months: Vec<MonthKey>,
    pub data_line_count: usize,
    pub extra_line_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer, H: ChartEventHandler> DateChartEngine<R, H> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let state = self.navigation.state();
        EngineSnapshot {
            viewport: self.viewport(),
            today: self.today(),
            centered_date: self.centered_date(),
            origin_x: state.origin_x,
            day_width: state.day_width,
            left_days: state.left_days(),
            scroll_direction: state.scroll_direction,
            fling_direction: state.fling_direction,
            phase: state.phase,
            animating: self.navigation.is_animating(),
            loaded_months: self.lines.loaded_months().collect(),
            data_line_count: self.lines.len(),
            extra_line_count: self.extra_lines.len(),
        }
    }
}
