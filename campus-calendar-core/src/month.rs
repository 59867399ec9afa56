//! Month arithmetic and the displayed-month navigation state.
//!
//! Months are zero-based throughout (`0` = January, `11` = December).
//! Weekdays count from Sunday (`0` = Sunday, `6` = Saturday).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{CalendarError, CalendarResult};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Gregorian leap year: divisible by 4, not by 100 unless by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn check_month(month: u32) -> CalendarResult<()> {
    if month > 11 {
        return Err(CalendarError::InvalidArgument(format!(
            "month index {month} is outside 0..=11"
        )));
    }
    Ok(())
}

fn check_year(year: i32) -> CalendarResult<()> {
    if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
        return Err(CalendarError::InvalidArgument(format!(
            "year {year} is outside the supported range"
        )));
    }
    Ok(())
}

fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Number of days in the zero-based `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> CalendarResult<u32> {
    check_month(month)?;
    Ok(month_length(year, month))
}

/// Weekday of the first of the month, Sunday = 0.
pub fn first_weekday_of_month(year: i32, month: u32) -> CalendarResult<u32> {
    check_month(month)?;
    check_year(year)?;
    let first = NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or_else(|| {
        CalendarError::InvalidArgument(format!("no first day for {year}-{:02}", month + 1))
    })?;
    Ok(first.weekday().num_days_from_sunday())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

/// The month/year currently rendered. Owned by the caller and replaced by
/// the value `navigate` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DisplayedMonth {
    year: i32,
    month: u32,
}

impl DisplayedMonth {
    pub fn new(year: i32, month: u32) -> CalendarResult<Self> {
        check_month(month)?;
        check_year(year)?;
        Ok(DisplayedMonth { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        DisplayedMonth {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// One-based month number, for display and `YYYY-MM` strings.
    pub fn month_number(&self) -> u32 {
        self.month + 1
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    pub fn days(&self) -> u32 {
        month_length(self.year, self.month)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.day(1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.day(self.days()).unwrap_or(NaiveDate::MAX)
    }

    /// Date for a one-based day of this month, `None` past the month's end.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }

    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }

    /// Step one month, rolling the year over at December/January.
    ///
    /// Saturates at the outermost months chrono can represent, so only there
    /// is a `Next` followed by a `Previous` not a round trip: stepping past
    /// the last month stays put, and stepping back then lands one month
    /// earlier.
    pub fn navigate(self, direction: Direction) -> Self {
        match direction {
            Direction::Next if self.month == 11 => {
                if self.year >= NaiveDate::MAX.year() {
                    return self;
                }
                DisplayedMonth {
                    year: self.year + 1,
                    month: 0,
                }
            }
            Direction::Next => DisplayedMonth {
                month: self.month + 1,
                ..self
            },
            Direction::Previous if self.month == 0 => {
                if self.year <= NaiveDate::MIN.year() {
                    return self;
                }
                DisplayedMonth {
                    year: self.year - 1,
                    month: 11,
                }
            }
            Direction::Previous => DisplayedMonth {
                month: self.month - 1,
                ..self
            },
        }
    }

    pub fn next(self) -> Self {
        self.navigate(Direction::Next)
    }

    pub fn previous(self) -> Self {
        self.navigate(Direction::Previous)
    }

    /// Apply `count` steps in `direction`, saturating like `navigate`.
    pub fn step(self, direction: Direction, count: u32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month);
        let first = i64::from(NaiveDate::MIN.year()) * 12;
        let last = i64::from(NaiveDate::MAX.year()) * 12 + 11;

        let target = match direction {
            Direction::Next => index + i64::from(count),
            Direction::Previous => index - i64::from(count),
        }
        .clamp(first, last);

        DisplayedMonth {
            year: target.div_euclid(12) as i32,
            month: target.rem_euclid(12) as u32,
        }
    }
}

/// Free-function form of [`DisplayedMonth::navigate`].
pub fn navigate_month(current: DisplayedMonth, direction: Direction) -> DisplayedMonth {
    current.navigate(direction)
}

impl fmt::Display for DisplayedMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

impl FromStr for DisplayedMonth {
    type Err = CalendarError;

    /// Parse `YYYY-MM` with a one-based month.
    fn from_str(s: &str) -> CalendarResult<Self> {
        let invalid = || {
            CalendarError::InvalidArgument(format!("invalid month '{s}'. Expected YYYY-MM"))
        };

        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if month == 0 {
            return Err(invalid());
        }

        DisplayedMonth::new(year, month - 1)
    }
}
