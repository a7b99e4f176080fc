use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CoreError;
use crate::time::parse_weekday_str;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// The weekdays counted as working days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkPattern {
    // Indexed by days from Monday.
    days: [bool; 7],
}

impl Default for WorkPattern {
    fn default() -> Self {
        Self::new([Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri])
    }
}

impl WorkPattern {
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut worked = [false; 7];
        for day in days {
            worked[day.num_days_from_monday() as usize] = true;
        }
        Self { days: worked }
    }

    /// Builds a pattern from names such as `mon` or `Tuesday`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, CoreError> {
        let days = names
            .iter()
            .map(|name| parse_weekday_str(name.as_ref().trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(days))
    }

    /// Parses a comma-separated list, e.g. `mon,tue,wed`.
    pub fn parse_list(input: &str) -> Result<Self, CoreError> {
        let names: Vec<&str> = input.split(',').filter(|s| !s.trim().is_empty()).collect();
        Self::from_names(names.as_slice())
    }

    pub fn is_worked(&self, weekday: Weekday) -> bool {
        self.days[weekday.num_days_from_monday() as usize]
    }

    pub fn is_working_date(&self, date: NaiveDate) -> bool {
        self.is_worked(date.weekday())
    }

    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.into_iter().filter(move |d| self.is_worked(*d))
    }

    pub fn len(&self) -> usize {
        self.days.iter().filter(|&&worked| worked).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for WorkPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .weekdays()
            .map(|d| d.to_string().to_lowercase())
            .collect();
        write!(f, "{}", names.join(","))
    }
}
