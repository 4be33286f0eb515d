use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::calendar::MonthKey;
use crate::core::primitives::{decimal_to_f64, ensure_finite};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One sample inside an anchor month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub day_of_month: u32,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(day_of_month: u32, value: f64) -> Self {
        Self {
            day_of_month,
            value,
        }
    }

    pub fn from_decimal(day_of_month: u32, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            day_of_month,
            value: decimal_to_f64(value, "value")?,
        })
    }
}

/// A colored series anchored to one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataLine {
    pub month: MonthKey,
    pub points: Vec<DataPoint>,
    pub color: Color,
}

impl DataLine {
    /// Builds a line for zero-based `month`, validating the anchor and every point.
    pub fn new(year: i32, month: u32, points: Vec<DataPoint>, color: Color) -> ChartResult<Self> {
        let month = MonthKey::new(year, month)?;
        color.validate()?;
        let last_day = month.days_in_month();
        for point in &points {
            if !(1..=last_day).contains(&point.day_of_month) {
                return Err(ChartError::InvalidData(format!(
                    "day_of_month must be in 1..={last_day} for {}-{:02}, got {}",
                    month.year,
                    month.month + 1,
                    point.day_of_month
                )));
            }
            ensure_finite(point.value, "data point value")?;
        }
        Ok(Self {
            month,
            points,
            color,
        })
    }

    /// Point on `day_of_month`; with duplicated days the first one in input order wins.
    #[must_use]
    pub fn point_on_day(&self, day_of_month: u32) -> Option<&DataPoint> {
        self.points
            .iter()
            .find(|point| point.day_of_month == day_of_month)
    }

    /// Point on `date`, `None` when `date` is outside this line's month.
    #[must_use]
    pub fn point_on(&self, date: NaiveDate) -> Option<&DataPoint> {
        if MonthKey::of(date) != self.month {
            return None;
        }
        self.point_on_day(date.day())
    }

    #[must_use]
    pub fn has_duplicate_days(&self) -> bool {
        let mut seen = [false; 32];
        for point in &self.points {
            let Some(slot) = seen.get_mut(point.day_of_month as usize) else {
                continue;
            };
            if *slot {
                return true;
            }
            *slot = true;
        }
        false
    }
}

/// Horizontal reference line drawn across the full width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraLine {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

impl ExtraLine {
    pub fn new(label: impl Into<String>, value: f64, color: Color) -> ChartResult<Self> {
        ensure_finite(value, "extra line value")?;
        color.validate()?;
        Ok(Self {
            label: label.into(),
            value,
            color,
        })
    }
}

/// One value found for a date, tagged with the series it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMatch {
    pub line_index: usize,
    pub point: DataPoint,
    pub color: Color,
}

/// Append-only collection of month series with a per-month index.
#[derive(Debug, Clone, Default)]
pub struct DataLineStore {
    lines: Vec<DataLine>,
    by_month: IndexMap<MonthKey, SmallVec<[usize; 2]>>,
}

impl DataLineStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `lines` after the existing ones. Returns how many were added.
    pub fn add_lines(&mut self, lines: impl IntoIterator<Item = DataLine>) -> usize {
        let before = self.lines.len();
        for line in lines {
            if line.has_duplicate_days() {
                warn!(
                    year = line.month.year,
                    month = line.month.month,
                    "data line repeats a day of month; the first point wins"
                );
            }
            let index = self.lines.len();
            self.by_month.entry(line.month).or_default().push(index);
            self.lines.push(line);
        }
        let added = self.lines.len() - before;
        debug!(added, total = self.lines.len(), "append data lines");
        added
    }

    /// Drops every line and installs `lines`; reserved for the host.
    pub fn replace_all(&mut self, lines: impl IntoIterator<Item = DataLine>) {
        self.lines.clear();
        self.by_month.clear();
        self.add_lines(lines);
    }

    #[must_use]
    pub fn lines(&self) -> &[DataLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn has_data_for(&self, month: MonthKey) -> bool {
        self.by_month.contains_key(&month)
    }

    /// Lines anchored to `month`, in insertion order.
    pub fn lines_for(&self, month: MonthKey) -> impl Iterator<Item = (usize, &DataLine)> {
        self.by_month
            .get(&month)
            .into_iter()
            .flat_map(|indices| indices.iter())
            .map(|&index| (index, &self.lines[index]))
    }

    /// Every value recorded for `date`, one per matching series.
    #[must_use]
    pub fn point_at(&self, date: NaiveDate) -> SmallVec<[PointMatch; 2]> {
        self.lines_for(MonthKey::of(date))
            .filter_map(|(line_index, line)| {
                line.point_on_day(date.day()).map(|point| PointMatch {
                    line_index,
                    point: *point,
                    color: line.color,
                })
            })
            .collect()
    }

    /// Months with at least one line, in first-loaded order.
    pub fn loaded_months(&self) -> impl Iterator<Item = MonthKey> + '_ {
        self.by_month.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DataLine, DataLineStore, DataPoint};
    use crate::core::calendar::MonthKey;
    use crate::render::Color;

    fn june_line(points: Vec<DataPoint>, color: Color) -> DataLine {
        DataLine::new(2024, 5, points, color).expect("valid line")
    }

    #[test]
    fn point_at_returns_every_overlapping_series() {
        let mut store = DataLineStore::new();
        store.add_lines(vec![
            june_line(vec![DataPoint::new(16, 80.0)], Color::rgb(1.0, 0.0, 0.0)),
            june_line(vec![DataPoint::new(16, 40.0)], Color::rgb(0.0, 0.0, 1.0)),
        ]);
        let date = NaiveDate::from_ymd_opt(2024, 6, 16).expect("date");
        let matches = store.point_at(date);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].point.value, 80.0);
        assert_eq!(matches[1].point.value, 40.0);
        assert_eq!(matches[1].line_index, 1);
    }

    #[test]
    fn duplicate_day_keeps_first_point() {
        let line = june_line(
            vec![DataPoint::new(3, 1.0), DataPoint::new(3, 2.0)],
            Color::rgb(0.0, 0.0, 0.0),
        );
        assert!(line.has_duplicate_days());
        assert_eq!(line.point_on_day(3).map(|p| p.value), Some(1.0));
    }

    #[test]
    fn rejects_out_of_range_day_and_month() {
        assert!(DataLine::new(2024, 12, Vec::new(), Color::rgb(0.0, 0.0, 0.0)).is_err());
        assert!(
            DataLine::new(2024, 0, vec![DataPoint::new(0, 1.0)], Color::rgb(0.0, 0.0, 0.0))
                .is_err()
        );
        assert!(
            DataLine::new(
                2024,
                0,
                vec![DataPoint::new(2, f64::NAN)],
                Color::rgb(0.0, 0.0, 0.0)
            )
            .is_err()
        );
    }

    #[test]
    fn replace_all_resets_month_index() {
        let mut store = DataLineStore::new();
        store.add_lines(vec![june_line(Vec::new(), Color::rgb(0.0, 0.0, 0.0))]);
        assert!(store.has_data_for(MonthKey { year: 2024, month: 5 }));
        store.replace_all(vec![
            DataLine::new(2023, 0, Vec::new(), Color::rgb(0.0, 0.0, 0.0)).expect("line"),
        ]);
        assert!(!store.has_data_for(MonthKey { year: 2024, month: 5 }));
        assert_eq!(
            store.loaded_months().collect::<Vec<_>>(),
            vec![MonthKey { year: 2023, month: 0 }]
        );
    }
}
