//! Calendar helpers: month ranges for salary records and the localized month labels
//! shown next to them.
use chrono::{Datelike, Month, NaiveDate};
use lazy_static::lazy_static;
use num_traits::cast::FromPrimitive;
use regex::Regex;
use std::error;
use std::fmt::{Display, Formatter};

use crate::types::{MonthRange, YearMonth};

/// Label used wherever a date is absent
pub const NO_DATE_LABEL: &str = "-";

const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidInput(String),
    InvalidMonth { year: i32, month: u32 },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInput(s) => {
                write!(f, "Invalid input {s}")
            }
            Error::InvalidMonth { year, month } => {
                write!(f, "{year}-{month:02} is not a valid calendar month")
            }
        }
    }
}

impl error::Error for Error {}

/// Returns the first and the last calendar day of the given month.
///
/// The last day honours month lengths and leap years:
/// ```rust,ignore
/// let range = month_bounds(2024, 2)?;
/// assert_eq!(range.last_day, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
///
/// # Errors
/// Returns `Error::InvalidMonth` if `month` is outside 1..=12 or the year is out of range.
pub fn month_bounds(year: i32, month: u32) -> Result<MonthRange, Error> {
    let invalid = || Error::InvalidMonth { year, month };

    let calendar_month = Month::from_u32(month).ok_or_else(invalid)?;
    let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

    // Day one of the following month, less a day
    let (next_year, next_month) = match calendar_month {
        Month::December => (year + 1, 1),
        _ => (year, month + 1),
    };
    let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(invalid)?;

    Ok(MonthRange {
        first_day,
        last_day,
    })
}

/// Fixed Russian name of a month number, `None` outside 1..=12
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Formats a date as "Month Year", i.e. `2025-02-10` gives "Февраль 2025".
/// An absent date gives [`NO_DATE_LABEL`].
#[must_use]
pub fn format_month_label(date: Option<NaiveDate>) -> String {
    match date {
        None => NO_DATE_LABEL.to_string(),
        Some(d) => match month_name(d.month()) {
            Some(name) => format!("{name} {:04}", d.year()),
            None => NO_DATE_LABEL.to_string(),
        },
    }
}

/// Parses the `YYYY-MM` value submitted by an HTML month input.
///
/// # Errors
/// Returns an error if the text does not look like `YYYY-MM` or the month is not 1..=12.
pub fn parse_year_month(s: &str) -> Result<YearMonth, Error> {
    lazy_static! {
        static ref YEAR_MONTH_EXPR: Regex = Regex::new(r"^(\d{4})-(\d{1,2})$").unwrap();
    }

    let s = s.trim();
    let captures = YEAR_MONTH_EXPR
        .captures(s)
        .ok_or_else(|| Error::InvalidInput(format!("'{s}' is not on the form YYYY-MM")))?;

    let year: i32 = captures[1]
        .parse()
        .map_err(|_| Error::InvalidInput(s.to_string()))?;
    let month: u32 = captures[2]
        .parse()
        .map_err(|_| Error::InvalidInput(s.to_string()))?;

    if month_name(month).is_none() {
        return Err(Error::InvalidMonth { year, month });
    }
    Ok(YearMonth { year, month })
}

/// Parses a calendar date on the form `YYYY-MM-DD`.
///
/// # Errors
/// Returns `Error::InvalidInput` if the text is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, Error> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| Error::InvalidInput(format!("'{s}' is not a date on the form YYYY-MM-DD: {e}")))
}
