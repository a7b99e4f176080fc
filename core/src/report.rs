use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::trace;

use crate::error::CoreError;
use crate::model::date_record::DateRecord;
use crate::model::stats::ReportStats;
use crate::model::work_pattern::WorkPattern;

/// Classification of a single day, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Holiday,
    Vacation,
    Working,
    Off,
}

fn in_range<'a>(
    records: &'a [DateRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = &'a DateRecord> {
    records.iter().filter(move |r| r.date >= start && r.date <= end)
}

/// Counts working and off days in `[start, end]`.
///
/// Holidays take precedence over vacations, which take precedence over the
/// work pattern. `total_holidays` and `total_vacations` count every in-range
/// record, so duplicated dates are counted once per record.
///
/// # Errors
///
/// Returns [`CoreError::InvalidRange`] if `end` is before `start`.
pub fn report(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &[DateRecord],
    vacations: &[DateRecord],
    pattern: &WorkPattern,
) -> Result<ReportStats, CoreError> {
    if end < start {
        return Err(CoreError::InvalidRange { start, end });
    }

    let holiday_set: HashSet<NaiveDate> = in_range(holidays, start, end).map(|r| r.date).collect();
    let vacation_set: HashSet<NaiveDate> = in_range(vacations, start, end).map(|r| r.date).collect();

    let mut stats = ReportStats {
        total_days: ((end - start).num_days() + 1) as u32,
        total_holidays: in_range(holidays, start, end).count() as u32,
        total_vacations: in_range(vacations, start, end).count() as u32,
        ..Default::default()
    };

    for date in start.iter_days().take_while(|d| *d <= end) {
        let worked = pattern.is_working_date(date);
        let kind = if holiday_set.contains(&date) {
            DayKind::Holiday
        } else if vacation_set.contains(&date) {
            DayKind::Vacation
        } else if worked {
            DayKind::Working
        } else {
            DayKind::Off
        };
        trace!(%date, ?kind, "classified day");

        match kind {
            DayKind::Holiday => {
                stats.off_days += 1;
                if worked {
                    stats.relevant_holidays += 1;
                }
                if vacation_set.contains(&date) {
                    stats.vacations_on_holiday += 1;
                }
            }
            DayKind::Vacation => {
                stats.off_days += 1;
                if worked {
                    stats.vacations_on_working_day += 1;
                }
            }
            DayKind::Working => stats.working_days += 1,
            DayKind::Off => stats.off_days += 1,
        }
    }

    Ok(stats)
}
