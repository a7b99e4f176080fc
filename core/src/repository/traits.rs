use crate::model::date_record::DateRecord;
use anyhow::Result;

pub trait DateSpecSource {
    fn load(&self) -> Result<Vec<DateRecord>>;
}

/// A source with no dates, used when no file was configured.
pub struct EmptySource;

impl DateSpecSource for EmptySource {
    fn load(&self) -> Result<Vec<DateRecord>> {
        Ok(Vec::new())
    }
}

impl<S: DateSpecSource> DateSpecSource for Option<S> {
    fn load(&self) -> Result<Vec<DateRecord>> {
        match self {
            Some(source) => source.load(),
            None => Ok(Vec::new()),
        }
    }
}

impl DateSpecSource for Vec<DateRecord> {
    fn load(&self) -> Result<Vec<DateRecord>> {
        Ok(self.clone())
    }
}
