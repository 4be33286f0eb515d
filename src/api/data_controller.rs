use tracing::debug;

use crate::core::{DataLine, DataLineStore, ExtraLine, MonthKey};
use crate::render::Renderer;

use super::{ChartEventHandler, DateChartEngine};

impl<R: Renderer, H: ChartEventHandler> DateChartEngine<R, H> {
    /// Appends month series. Never replaces earlier lines; always requests a redraw.
    pub fn add_lines(&mut self, lines: impl IntoIterator<Item = DataLine>) {
        self.lines.add_lines(lines);
        self.request_redraw();
    }

    /// Host-side replacement of the whole series collection.
    pub fn set_lines(&mut self, lines: impl IntoIterator<Item = DataLine>) {
        self.lines.replace_all(lines);
        self.request_redraw();
    }

    #[must_use]
    pub fn data_lines(&self) -> &DataLineStore {
        &self.lines
    }

    #[must_use]
    pub fn has_data_for(&self, month: MonthKey) -> bool {
        self.lines.has_data_for(month)
    }

    pub fn add_extra_lines(&mut self, lines: impl IntoIterator<Item = ExtraLine>) {
        self.extra_lines.extend(lines);
        debug!(count = self.extra_lines.len(), "append extra lines");
        self.request_redraw();
    }

    pub fn set_extra_lines(&mut self, lines: Vec<ExtraLine>) {
        self.extra_lines = lines;
        debug!(count = self.extra_lines.len(), "replace extra lines");
        self.request_redraw();
    }

    #[must_use]
    pub fn extra_lines(&self) -> &[ExtraLine] {
        &self.extra_lines
    }
}
