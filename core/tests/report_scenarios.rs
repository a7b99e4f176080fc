use chrono::NaiveDate;
use workdays_core::{parse, report, ReportStats, WorkPattern};

const BANK_HOLIDAYS: &str = "\
2024-01-01 New Year's Day
2024-02-05 St Brigid's Day
2024-03-18 Saint Patrick's Day
2024-04-01 Easter Monday
2024-05-06 May Day
2024-06-03 June Bank Holiday
2024-08-05 August Bank Holiday
2024-10-28 October Bank Holiday
2024-12-25 Christmas Day
2024-12-26 St Stephens's Day
2025-01-01 New Year's Day
2025-02-03 St Brigid's Day
2025-03-17 Saint Patrick's Day
2025-04-21 Easter Monday
2025-05-05 May Day
2025-06-02 June Bank Holiday
2025-08-04 August Bank Holiday
2025-10-27 October Bank Holiday
2025-12-25 Christmas Day
2025-12-26 St Stephens's Day
2026-01-01 New Year's Day
2026-02-02 St Brigid's Day
2026-03-17 Saint Patrick's Day
2026-04-06 Easter Monday
2026-05-04 May Day
2026-06-01 June Bank Holiday
2026-08-03 August Bank Holiday
2026-10-26 October Bank Holiday
2026-12-25 Christmas Day
2026-12-26 St Stephens's Day
";

const VACATIONS: &str = "\
2025-04-22 4 days weekend
2025-12-20:2026-01-01 Winter vacation
";

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn run(start: NaiveDate, end: NaiveDate) -> ReportStats {
    let holidays = parse(BANK_HOLIDAYS, true);
    let vacations = parse(VACATIONS, true);
    assert_eq!(holidays.len(), 30);
    assert_eq!(vacations.len(), 14);

    let stats = report(start, end, &holidays, &vacations, &WorkPattern::default()).unwrap();
    assert_eq!(stats.total_days, stats.working_days + stats.off_days);
    assert_eq!(stats.total_days as i64, (end - start).num_days() + 1);
    stats
}

#[test]
fn easter_window() {
    assert_eq!(
        run(day(2025, 4, 4), day(2025, 4, 23)),
        ReportStats {
            total_days: 20,
            working_days: 12,
            off_days: 8,
            relevant_holidays: 1,
            total_holidays: 1,
            vacations_on_working_day: 1,
            vacations_on_holiday: 0,
            total_vacations: 1,
        }
    );
}

#[test]
fn two_quiet_weeks() {
    assert_eq!(
        run(day(2025, 4, 7), day(2025, 4, 20)),
        ReportStats {
            total_days: 14,
            working_days: 10,
            off_days: 4,
            ..Default::default()
        }
    );
}

#[test]
fn full_year_with_winter_vacation() {
    assert_eq!(
        run(day(2025, 4, 4), day(2026, 4, 23)),
        ReportStats {
            total_days: 385,
            working_days: 257,
            off_days: 128,
            relevant_holidays: 11,
            total_holidays: 11,
            vacations_on_working_day: 7,
            vacations_on_holiday: 3,
            total_vacations: 14,
        }
    );
}

#[test]
fn records_outside_window_are_ignored() {
    let stats = run(day(2027, 1, 4), day(2027, 1, 10));
    assert_eq!(stats.total_holidays, 0);
    assert_eq!(stats.total_vacations, 0);
    assert_eq!(stats.working_days, 5);
}
