use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::date_record::DateRecord;
use crate::model::stats::ReportStats;
use crate::model::work_pattern::WorkPattern;

/// Everything a formatter needs to render one report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReportDto {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub work_days: Vec<String>,
    pub weeks: f64,
    pub stats: ReportStats,

    // In-range records, sorted by date, for listing
    pub holidays: Vec<DateRecord>,
    pub vacations: Vec<DateRecord>,
}

impl ReportDto {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        pattern: &WorkPattern,
        stats: ReportStats,
        holidays: &[DateRecord],
        vacations: &[DateRecord],
    ) -> Self {
        let pick = |records: &[DateRecord]| {
            let mut in_range: Vec<DateRecord> = records
                .iter()
                .filter(|r| r.date >= start && r.date <= end)
                .cloned()
                .collect();
            in_range.sort();
            in_range
        };

        Self {
            start,
            end,
            work_days: pattern.weekdays().map(|d| d.to_string().to_lowercase()).collect(),
            weeks: stats.weeks(),
            stats,
            holidays: pick(holidays),
            vacations: pick(vacations),
        }
    }

    /// Long label such as `Friday 2025-04-04`.
    pub fn start_label(&self) -> String {
        self.start.format("%A %Y-%m-%d").to_string()
    }

    pub fn end_label(&self) -> String {
        self.end.format("%A %Y-%m-%d").to_string()
    }
}
