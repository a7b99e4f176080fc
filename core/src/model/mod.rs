pub mod date_record;
pub mod stats;
pub mod work_pattern;
