use anyhow::Result;
use clap::ValueEnum;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use workdays_core::{DateRecord, ReportDto};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
}

#[derive(Tabled)]
struct CounterRow {
    #[tabled(rename = "Counter")]
    name: &'static str,
    #[tabled(rename = "Days")]
    value: u32,
}

#[derive(Tabled)]
struct DateRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Description")]
    desc: String,
}

pub fn render(dto: &ReportDto, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(dto)),
        OutputFormat::Table => Ok(render_table(dto)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(dto)?),
    }
}

pub fn render_text(dto: &ReportDto) -> String {
    let s = &dto.stats;
    format!(
        "Report between {} and {}\n \
         - total days: {}  ({:.1} weeks)\n \
         - working days: {}\n \
         - total off days: {}\n \
         - holidays: {} falling on working weekdays\n \
         - vacations: {} days\n",
        dto.start_label(),
        dto.end_label(),
        s.total_days,
        dto.weeks,
        s.working_days,
        s.off_days,
        s.relevant_holidays,
        s.vacations_on_working_day,
    )
}

fn date_rows<'a>(records: &'a [DateRecord], kind: &'static str) -> impl Iterator<Item = DateRow> + 'a {
    records.iter().map(move |r| DateRow {
        date: r.date.format("%Y-%m-%d (%a)").to_string(),
        kind,
        desc: r.description.clone(),
    })
}

pub fn render_table(dto: &ReportDto) -> String {
    let rows: Vec<CounterRow> = dto
        .stats
        .entries()
        .into_iter()
        .map(|(name, value)| CounterRow { name, value })
        .collect();

    let mut counters = Table::new(rows);
    counters
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    let mut out = format!(
        "\x1b[1;36mReport between {} and {}\x1b[0m (work days: {})\n{}\n",
        dto.start_label(),
        dto.end_label(),
        dto.work_days.join(","),
        counters
    );

    let dates: Vec<DateRow> = date_rows(&dto.holidays, "holiday")
        .chain(date_rows(&dto.vacations, "vacation"))
        .collect();
    if !dates.is_empty() {
        let mut listing = Table::new(dates);
        listing
            .with(Style::modern())
            .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
        out.push_str(&format!("{}\n", listing));
    }
    out
}
