mod logging;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use tracing::{debug, warn};
use workdays_core::{parse_date_arg, Config, FileDateSpecSource, ReportService, WorkPattern};

use crate::report::{render, OutputFormat};

#[derive(Parser)]
#[command(name = "workdays", version)]
#[command(about = "Count working days, holidays and vacations between two dates", long_about = None)]
struct Cli {
    /// Produce a basic report of the period between two dates (ISO dates or `today`)
    #[arg(long, num_args = 2, value_names = ["START", "END"], value_parser = parse_date_arg)]
    report: Option<Vec<NaiveDate>>,

    /// File containing holiday dates
    #[arg(long)]
    holidays_file: Option<PathBuf>,

    /// File containing vacation dates
    #[arg(long)]
    vacations_file: Option<PathBuf>,

    /// Comma-separated worked weekdays, e.g. `mon,tue,wed,thu`
    #[arg(long)]
    work_days: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Don't warn about invalid dates in date files
    #[arg(short, long)]
    quiet: bool,
}

fn open_source(
    path: Option<PathBuf>,
    flag: &str,
    kind: &str,
    quiet: bool,
) -> Result<Option<FileDateSpecSource>> {
    match path {
        Some(p) => Ok(Some(FileDateSpecSource::new(p, quiet)?)),
        None => {
            warn!("No {} file provided. Use --{} to provide one", kind, flag);
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    debug!(?config, "effective config");

    let pattern = match &cli.work_days {
        Some(list) => WorkPattern::parse_list(list)?,
        None => config.work_pattern()?,
    };

    let Some(dates) = cli.report else {
        println!("Nothing to report. Use --report START END to produce a report.");
        return Ok(());
    };

    let holidays = open_source(
        cli.holidays_file.or(config.holidays_file),
        "holidays-file",
        "holidays",
        cli.quiet,
    )?;
    let vacations = open_source(
        cli.vacations_file.or(config.vacations_file),
        "vacations-file",
        "vacations",
        cli.quiet,
    )?;

    let service = ReportService::new(holidays, vacations, pattern);
    let dto = service.build(dates[0], dates[1])?;
    print!("{}", render(&dto, cli.format)?);

    Ok(())
}
