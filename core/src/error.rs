use std::path::PathBuf;

use chrono::NaiveDate;

/// Errors raised by the parsing and reporting layers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("malformed date literal: '{0}' (expected YYYY-MM-DD)")]
    MalformedDate(String),

    #[error("year {year} is out of range (must be 1..=9999)")]
    InvalidYear { year: i32 },

    #[error("month must be in 1..12, got {month}")]
    InvalidMonth { month: u32 },

    #[error("day {day} is out of range for {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    #[error("report end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("unknown weekday: '{0}'")]
    UnknownWeekday(String),

    #[error("date file doesn't exist: {}", .0.display())]
    MissingFile(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidMonth { month: 65 };
        assert_eq!(err.to_string(), "month must be in 1..12, got 65");

        let err = CoreError::InvalidDay { year: 2024, month: 12, day: 32 };
        assert_eq!(err.to_string(), "day 32 is out of range for 2024-12");

        let start = NaiveDate::from_ymd_opt(2025, 4, 23).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 4, 4).unwrap();
        let err = CoreError::InvalidRange { start, end };
        assert_eq!(err.to_string(), "report end 2025-04-04 is before start 2025-04-23");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CoreError>();
    }
}
