use anyhow::{anyhow, Result};
use chrono::{Duration, Local, NaiveDate, Weekday};

use crate::error::CoreError;

/// Strictly parses a `YYYY-MM-DD` literal into a Gregorian date.
pub fn parse_iso_date(literal: &str) -> Result<NaiveDate, CoreError> {
    let malformed = || CoreError::MalformedDate(literal.to_string());

    if !is_iso_shape(literal) {
        return Err(malformed());
    }
    let year: i32 = literal[0..4].parse().map_err(|_| malformed())?;
    let month: u32 = literal[5..7].parse().map_err(|_| malformed())?;
    let day: u32 = literal[8..10].parse().map_err(|_| malformed())?;

    if year < 1 {
        return Err(CoreError::InvalidYear { year });
    }
    if !(1..=12).contains(&month) {
        return Err(CoreError::InvalidMonth { month });
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CoreError::InvalidDay { year, month, day })
}

/// True if `s` is exactly `DDDD-DD-DD` with ASCII digits.
pub(crate) fn is_iso_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a command-line date: an ISO date or a keyword relative to the local day.
pub fn parse_date_arg(input: &str) -> Result<NaiveDate> {
    parse_date_arg_at(input, Local::now().date_naive())
}

pub fn parse_date_arg_at(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => return Ok(today - Duration::days(1)),
        "tomorrow" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    parse_iso_date(input).map_err(|e| anyhow!("Could not parse date '{}': {}", input, e))
}

pub fn parse_weekday_str(s: &str) -> Result<Weekday, CoreError> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(CoreError::UnknownWeekday(s.to_string())),
    }
}
