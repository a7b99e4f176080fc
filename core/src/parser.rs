//! Date-spec text parsing.
//!
//! A date-spec is plain text with one entry per line:
//!
//! ```text
//! 2025-04-21 Easter Monday
//! 2025-12-20:2026-01-01 Winter vacation
//! ```
//!
//! Lines that match neither form are ignored.

use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::date_record::DateRecord;
use crate::time::{is_iso_shape, parse_iso_date};

const DATE_LEN: usize = 10;

/// A date literal that had the right shape but was not a valid date.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedDate {
    /// 1-based line number in the input text.
    pub line: usize,
    pub literal: String,
    pub reason: CoreError,
}

#[derive(Debug, Default)]
pub struct ParsedDates {
    pub records: Vec<DateRecord>,
    pub rejected: Vec<RejectedDate>,
}

#[derive(Debug, PartialEq)]
enum Entry<'a> {
    Single {
        date: &'a str,
        description: &'a str,
    },
    Range {
        start: &'a str,
        end: &'a str,
        description: &'a str,
    },
}

fn classify_line(line: &str) -> Option<Entry<'_>> {
    let head = line.get(..DATE_LEN)?;
    if !is_iso_shape(head) {
        return None;
    }
    let rest = &line[DATE_LEN..];

    match rest.strip_prefix(':') {
        None => Some(Entry::Single {
            date: head,
            description: rest.trim(),
        }),
        Some(after_colon) => {
            let end = after_colon.get(..DATE_LEN)?;
            if !is_iso_shape(end) {
                return None;
            }
            Some(Entry::Range {
                start: head,
                end,
                description: after_colon[DATE_LEN..].trim(),
            })
        }
    }
}

/// Inclusive day-by-day expansion. Inverted bounds are swapped.
pub fn expand_range(start: NaiveDate, end: NaiveDate, description: &str) -> Vec<DateRecord> {
    let (first, last) = if start <= end { (start, end) } else { (end, start) };
    let days = (last - first).num_days();
    (0..=days)
        .map(|offset| DateRecord::with_description(first + Duration::days(offset), description))
        .collect()
}

/// Parses `text` and collects rejected literals instead of logging them.
pub fn parse_detailed(text: &str) -> ParsedDates {
    let mut singles = Vec::new();
    let mut ranges = Vec::new();
    let mut rejected = Vec::new();

    let mut reject = |line: usize, literal: &str, reason: CoreError| {
        rejected.push(RejectedDate {
            line,
            literal: literal.to_string(),
            reason,
        });
    };

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        match classify_line(line) {
            Some(Entry::Single { date, description }) => match parse_iso_date(date) {
                Ok(d) => singles.push(DateRecord::with_description(d, description)),
                Err(e) => reject(line_no, date, e),
            },
            Some(Entry::Range {
                start,
                end,
                description,
            }) => {
                let start_date = match parse_iso_date(start) {
                    Ok(d) => d,
                    Err(e) => {
                        reject(line_no, start, e);
                        continue;
                    }
                };
                let end_date = match parse_iso_date(end) {
                    Ok(d) => d,
                    Err(e) => {
                        reject(line_no, end, e);
                        continue;
                    }
                };
                if end_date < start_date {
                    debug!(line = line_no, %start_date, %end_date, "swapping inverted date range");
                }
                ranges.push(expand_range(start_date, end_date, description));
            }
            None => {}
        }
    }

    // Single dates first, then every range in text order.
    let mut records = singles;
    records.extend(ranges.into_iter().flatten());

    ParsedDates { records, rejected }
}

/// Parses `text` into date records, warning about invalid literals unless `quiet`.
pub fn parse(text: &str, quiet: bool) -> Vec<DateRecord> {
    let parsed = parse_detailed(text);
    if !quiet {
        for r in &parsed.rejected {
            warn!("{} - {} (line {})", r.literal, r.reason, r.line);
        }
    }
    debug!(records = parsed.records.len(), rejected = parsed.rejected.len(), "parsed date spec");
    parsed.records
}
