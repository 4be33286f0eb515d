use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::MonthKey;

/// Notifications the chart sends to its host.
///
/// Every hook has a no-op default; hooks run synchronously inside the event
/// or render step that triggered them.
pub trait ChartEventHandler {
    /// A visible day falls in a month with no loaded line. Fired at most once
    /// per month per render pass; hosts answer with `add_lines`.
    fn on_missing_month(&mut self, _month: MonthKey) {}

    /// Navigation settled on a new centered day.
    fn on_day_selected(&mut self, _date: NaiveDate) {}

    /// State changed and the next frame should be painted.
    fn on_redraw_requested(&mut self) {}
}

/// Handler that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventHandler;

impl ChartEventHandler for NoopEventHandler {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartEvent {
    MissingMonth(MonthKey),
    DaySelected(NaiveDate),
    RedrawRequested,
}

/// Handler that queues notifications for the host to drain between frames.
#[derive(Debug, Clone, Default)]
pub struct ChartEventQueue {
    events: Vec<ChartEvent>,
    record_redraws: bool,
}

impl ChartEventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also queue `RedrawRequested`, which is skipped by default.
    #[must_use]
    pub fn with_redraws(mut self) -> Self {
        self.record_redraws = true;
        self
    }

    #[must_use]
    pub fn events(&self) -> &[ChartEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<ChartEvent> {
        std::mem::take(&mut self.events)
    }

    /// Selected dates in the order they were reported.
    #[must_use]
    pub fn selected_days(&self) -> Vec<NaiveDate> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ChartEvent::DaySelected(date) => Some(*date),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn missing_months(&self) -> Vec<MonthKey> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ChartEvent::MissingMonth(month) => Some(*month),
                _ => None,
            })
            .collect()
    }
}

impl ChartEventHandler for ChartEventQueue {
    fn on_missing_month(&mut self, month: MonthKey) {
        self.events.push(ChartEvent::MissingMonth(month));
    }

    fn on_day_selected(&mut self, date: NaiveDate) {
        self.events.push(ChartEvent::DaySelected(date));
    }

    fn on_redraw_requested(&mut self) {
        if self.record_redraws {
            self.events.push(ChartEvent::RedrawRequested);
        }
    }
}
