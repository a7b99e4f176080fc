use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A calendar date with an attached free-text description.
///
/// Comparison, ordering and hashing only look at the date: two records for
/// the same day with different descriptions are equal.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DateRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl DateRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            description: String::new(),
        }
    }

    pub fn with_description(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

impl From<NaiveDate> for DateRecord {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl PartialEq for DateRecord {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for DateRecord {}

impl PartialOrd for DateRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl Hash for DateRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_equality_ignores_description() {
        let a = DateRecord::with_description(day(2025, 4, 21), "Easter Monday");
        let b = DateRecord::new(day(2025, 4, 21));
        assert_eq!(a, b);
        assert_ne!(a.description, b.description);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_ordering_follows_date() {
        let mut records = vec![
            DateRecord::with_description(day(2025, 12, 25), "Christmas Day"),
            DateRecord::with_description(day(2025, 1, 1), "New Year's Day"),
        ];
        records.sort();
        assert_eq!(records[0].date, day(2025, 1, 1));
        assert_eq!(records[1].weekday(), Weekday::Thu);
    }
}
