//! Displayed-month cursor.
//!
//! # Responsibility
//! - Hold the `{year, month}` pair the calendar currently shows.
//! - Step one month in either direction, rolling the year on wrap.
//!
//! # Invariants
//! - `month` stays within `0..=11` after every step.

/// Currently displayed month, with a 0-based month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    /// 0 = January ... 11 = December.
    pub month: u32,
}

impl MonthCursor {
    /// Creates a cursor, clamping `month` into the valid range.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.min(11),
        }
    }

    /// Steps one month forward, rolling December into January of next year.
    pub fn next(self) -> Self {
        if self.month >= 11 {
            Self {
                year: self.year + 1,
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Steps one month back, rolling January into December of previous year.
    pub fn prev(self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year - 1,
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}
