use chrono::{Datelike, Local, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Calendar month used as the anchor of a data line.
///
/// `month` is zero-based (`0` = January) to match the host data contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> ChartResult<Self> {
        if month > 11 {
            return Err(ChartError::InvalidData(format!(
                "month must be in 0..=11, got {month}"
            )));
        }
        if NaiveDate::from_ymd_opt(year, month + 1, 1).is_none() {
            return Err(ChartError::InvalidData(format!(
                "year {year} is outside the supported calendar range"
            )));
        }
        Ok(Self { year, month })
    }

    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// Resolves `day_of_month` inside this month, `None` when the day does not exist.
    #[must_use]
    pub fn date_of_day(self, day_of_month: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day_of_month)
    }

    #[must_use]
    pub fn days_in_month(self) -> u32 {
        let Some(first) = self.date_of_day(1) else {
            return 0;
        };
        let next_first = if self.month == 11 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 2, 1)
        };
        next_first
            .map(|next| next.signed_duration_since(first).num_days() as u32)
            .unwrap_or(31)
    }
}

/// Where the "today" anchor comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockSource {
    /// Host local time zone.
    #[default]
    Local,
    Utc,
    /// Frozen date, used by tests and replay tooling.
    Fixed(NaiveDate),
}

/// Stateless day arithmetic around the "today" anchor.
///
/// Offsets are signed day counts relative to today: `0` is today, negative
/// values are in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateIndexMapper {
    clock: ClockSource,
}

impl DateIndexMapper {
    #[must_use]
    pub const fn new(clock: ClockSource) -> Self {
        Self { clock }
    }

    #[must_use]
    pub const fn fixed(today: NaiveDate) -> Self {
        Self::new(ClockSource::Fixed(today))
    }

    #[must_use]
    pub fn clock(self) -> ClockSource {
        self.clock
    }

    /// Current date at day resolution. Read it once per pass and thread the
    /// value through, so a midnight crossing never splits one frame.
    #[must_use]
    pub fn today(self) -> NaiveDate {
        match self.clock {
            ClockSource::Local => Local::now().date_naive(),
            ClockSource::Utc => Utc::now().date_naive(),
            ClockSource::Fixed(date) => date,
        }
    }

    #[must_use]
    pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
        TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
    }

    #[must_use]
    pub fn same_day(a: NaiveDate, b: NaiveDate) -> bool {
        a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
    }

    #[must_use]
    pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
        MonthKey::of(a) == MonthKey::of(b)
    }

    #[must_use]
    pub fn is_after(a: NaiveDate, b: NaiveDate) -> bool {
        a > b
    }

    /// Signed day offset of `date` relative to `today`.
    #[must_use]
    pub fn day_offset_of(today: NaiveDate, date: NaiveDate) -> i64 {
        date.signed_duration_since(today).num_days()
    }
}
