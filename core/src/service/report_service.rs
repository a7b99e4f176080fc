use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::model::work_pattern::WorkPattern;
use crate::report::report;
use crate::repository::DateSpecSource;
use crate::service::dto::ReportDto;

pub struct ReportService<H: DateSpecSource, V: DateSpecSource> {
    holidays: H,
    vacations: V,
    pattern: WorkPattern,
}

impl<H: DateSpecSource, V: DateSpecSource> ReportService<H, V> {
    pub fn new(holidays: H, vacations: V, pattern: WorkPattern) -> Self {
        Self {
            holidays,
            vacations,
            pattern,
        }
    }

    pub fn pattern(&self) -> &WorkPattern {
        &self.pattern
    }

    /// Builds the report between two dates given in either order.
    pub fn build(&self, a: NaiveDate, b: NaiveDate) -> Result<ReportDto> {
        let start = a.min(b);
        let end = a.max(b);

        let holidays = self.holidays.load()?;
        let vacations = self.vacations.load()?;
        info!(
            %start,
            %end,
            holidays = holidays.len(),
            vacations = vacations.len(),
            work_days = %self.pattern,
            "building report"
        );

        let stats = report(start, end, &holidays, &vacations, &self.pattern)?;
        Ok(ReportDto::new(start, end, &self.pattern, stats, &holidays, &vacations))
    }
}
