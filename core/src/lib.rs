pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod repository;
pub mod service;
pub mod time;

pub use config::Config;
pub use error::CoreError;
pub use model::date_record::DateRecord;
pub use model::stats::ReportStats;
pub use model::work_pattern::WorkPattern;
pub use parser::{parse, parse_detailed};
pub use report::report;
pub use repository::{DateSpecSource, EmptySource, FileDateSpecSource};
pub use service::dto::ReportDto;
pub use service::report_service::ReportService;
pub use time::{parse_date_arg, parse_iso_date};
