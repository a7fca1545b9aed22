//! Month grid derivation.
//!
//! # Responsibility
//! - Compute day count and Monday-first leading blank count for a month.
//! - Join the date index and user events into per-day cell view models.
//!
//! # Invariants
//! - `leading_blanks = (weekday_of_first + 6) % 7` with Sunday = 0, so the
//!   1st always lands under its weekday in a Monday-first 7-column grid.
//! - Cell keys are `YYYY-MM-DD` literals, matching index and event keys.

use super::cursor::MonthCursor;
use crate::index::{DateIndex, DateKind};
use crate::model::event::UserEvent;
use chrono::{Datelike, NaiveDate};

/// Shape of one rendered month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// 0-based month index.
    pub month: u32,
    /// Number of empty cells before day 1 in a Monday-first grid.
    pub leading_blanks: u32,
    /// Number of days in the month.
    pub day_count: u32,
}

/// View model for one day cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// `YYYY-MM-DD` literal for this day.
    pub date: String,
    /// Day of month, 1-based.
    pub day: u32,
    /// Document date classification, when any document lands on this day.
    pub kind: Option<DateKind>,
    /// Contributing document ids from the date index.
    pub document_ids: Vec<String>,
    /// User event texts for this day, in append order.
    pub user_events: Vec<String>,
}

impl MonthGrid {
    /// Computes the grid shape for the cursor's month.
    pub fn for_cursor(cursor: MonthCursor) -> Self {
        Self::for_month(cursor.year, cursor.month)
    }

    /// Computes the grid shape for a 0-based `month` of `year`.
    pub fn for_month(year: i32, month: u32) -> Self {
        let month = month.min(11);
        let first = first_of_month(year, month);
        let weekday_of_first = first.weekday().num_days_from_sunday();
        let next_first = first_of_month(
            if month == 11 { year + 1 } else { year },
            if month == 11 { 0 } else { month + 1 },
        );
        Self {
            year,
            month,
            leading_blanks: (weekday_of_first + 6) % 7,
            day_count: (next_first - first).num_days() as u32,
        }
    }

    /// Joins the date index and user events into ordered day cells.
    ///
    /// A day with no documents and no events yields an empty cell, not a gap.
    pub fn cells(&self, date_index: &DateIndex, user_events: &[UserEvent]) -> Vec<DayCell> {
        (1..=self.day_count)
            .map(|day| {
                let date = format!("{:04}-{:02}-{:02}", self.year, self.month + 1, day);
                let entry = date_index.get(&date);
                DayCell {
                    day,
                    kind: entry.map(|entry| entry.kind),
                    document_ids: entry
                        .map(|entry| entry.document_ids.clone())
                        .unwrap_or_default(),
                    user_events: user_events
                        .iter()
                        .filter(|event| event.date == date)
                        .map(|event| event.text.clone())
                        .collect(),
                    date,
                }
            })
            .collect()
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // month is pre-clamped to 0..=11, so the 1st always exists.
    NaiveDate::from_ymd_opt(year, month + 1, 1).expect("clamped month has a first day")
}
