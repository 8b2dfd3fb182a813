use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::TimeSpanError;

/// Calendar length of a time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanLength {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

impl SpanLength {
    pub fn name(self) -> &'static str {
        match self {
            SpanLength::Daily => "daily",
            SpanLength::Weekly => "weekly",
            SpanLength::Biweekly => "biweekly",
            SpanLength::Monthly => "monthly",
            SpanLength::Yearly => "yearly",
        }
    }
}

impl FromStr for SpanLength {
    type Err = TimeSpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(SpanLength::Daily),
            "weekly" => Ok(SpanLength::Weekly),
            "biweekly" => Ok(SpanLength::Biweekly),
            "monthly" => Ok(SpanLength::Monthly),
            "yearly" => Ok(SpanLength::Yearly),
            other => Err(TimeSpanError::UnknownLength(other.to_string())),
        }
    }
}

impl fmt::Display for SpanLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An inclusive window of whole days.
///
/// Built by aligning a seed date to the start of its calendar period; moved
/// forward with [`TimeSpan::next`], which never re-aligns, so successive
/// windows tile the calendar without gaps or overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    length: SpanLength,
    start: NaiveDate,
    end: NaiveDate,
}

impl TimeSpan {
    /// The window of `length` that `seed` falls into.
    ///
    /// Weeks start on Monday. Two-week windows start on the Monday of an odd
    /// ISO week, so every seed in the same fortnight aligns identically.
    pub fn aligned(seed: NaiveDate, length: SpanLength) -> Result<Self, TimeSpanError> {
        let start = match length {
            SpanLength::Daily => Some(seed),
            SpanLength::Weekly => monday_of(seed),
            SpanLength::Biweekly => monday_of(seed).and_then(|monday| {
                if monday.iso_week().week() % 2 == 0 {
                    monday.checked_sub_days(Days::new(7))
                } else {
                    Some(monday)
                }
            }),
            SpanLength::Monthly => seed.with_day(1),
            SpanLength::Yearly => NaiveDate::from_ymd_opt(seed.year(), 1, 1),
        }
        .ok_or(TimeSpanError::OutOfRange(seed))?;

        Self::starting_at(start, length)
    }

    fn starting_at(start: NaiveDate, length: SpanLength) -> Result<Self, TimeSpanError> {
        let end = match length {
            SpanLength::Daily => Some(start),
            SpanLength::Weekly => start.checked_add_days(Days::new(6)),
            SpanLength::Biweekly => start.checked_add_days(Days::new(13)),
            SpanLength::Monthly => start
                .with_day(1)
                .and_then(|first| first.checked_add_months(Months::new(1)))
                .and_then(|next_month| next_month.pred_opt()),
            SpanLength::Yearly => NaiveDate::from_ymd_opt(start.year(), 12, 31),
        }
        .ok_or(TimeSpanError::OutOfRange(start))?;

        Ok(TimeSpan { length, start, end })
    }

    /// The window directly after this one.
    pub fn next(&self) -> Result<Self, TimeSpanError> {
        let start = match self.length {
            SpanLength::Daily => self.start.checked_add_days(Days::new(1)),
            SpanLength::Weekly => self.start.checked_add_days(Days::new(7)),
            SpanLength::Biweekly => self.start.checked_add_days(Days::new(14)),
            SpanLength::Monthly => self.start.checked_add_months(Months::new(1)),
            SpanLength::Yearly => self.start.checked_add_months(Months::new(12)),
        }
        .ok_or(TimeSpanError::OutOfRange(self.start))?;

        Self::starting_at(start, self.length)
    }

    pub fn length(&self) -> SpanLength {
        self.length
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

fn monday_of(date: NaiveDate) -> Option<NaiveDate> {
    let offset = date.weekday().num_days_from_monday();
    date.checked_sub_days(Days::new(u64::from(offset)))
}
