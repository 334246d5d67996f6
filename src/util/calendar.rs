//! Pure date math for the month-grid calendar.
//!
//! Weeks run Sunday through Saturday. Cells outside the displayed month are
//! `None` so the view can render them as blanks. "Today" comes from the
//! browser clock under `csr` and is threaded into the pure functions as a
//! parameter, keeping everything here clock-free and testable.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use chrono::{Datelike, NaiveDate};

/// A month identified by year and 1-based month number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// The month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The previous calendar month, wrapping across year boundaries.
    #[must_use]
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next calendar month, wrapping across year boundaries.
    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Display title, e.g. `"March 2026"`.
    #[must_use]
    pub fn title(self) -> String {
        const NAMES: [&str; 12] = [
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
        let name = NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        format!("{name} {}", self.year)
    }
}

/// Sunday-first weeks covering the month; `None` cells pad the edges.
///
/// Every inner vector has exactly seven entries.
#[must_use]
pub fn month_grid(month: Month) -> Vec<Vec<Option<NaiveDate>>> {
    let Some(first) = NaiveDate::from_ymd_opt(month.year, month.month, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];

    let mut day = first;
    while day.month() == month.month {
        cells.push(Some(day));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    cells.chunks(7).map(<[Option<NaiveDate>]>::to_vec).collect()
}

/// The calendar day of an event's wire `date` string.
///
/// Accepts both plain `YYYY-MM-DD` and ISO datetime strings; only the first
/// ten characters are significant.
#[must_use]
pub fn event_day(date: &str) -> Option<NaiveDate> {
    let day: String = date.chars().take(10).collect();
    NaiveDate::parse_from_str(&day, "%Y-%m-%d").ok()
}

/// Format a date for the day-panel header, e.g. `"Saturday, March 14, 2026"`.
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {}, {}",
        weekday_name(date),
        Month::of(date).title().split(' ').next().unwrap_or("?"),
        date.day(),
        date.year()
    )
}

fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
}

/// Today's date from the browser clock. `None` outside the browser.
#[must_use]
pub fn today() -> Option<NaiveDate> {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).ok()?;
        NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
