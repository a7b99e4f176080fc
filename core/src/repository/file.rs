use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::error::CoreError;
use crate::model::date_record::DateRecord;
use crate::parser;
use crate::repository::traits::DateSpecSource;

/// A date-spec text file on disk.
#[derive(Clone, Debug)]
pub struct FileDateSpecSource {
    path: PathBuf,
    quiet: bool,
}

impl FileDateSpecSource {
    /// Fails if `path` is not an existing regular file.
    pub fn new(path: impl Into<PathBuf>, quiet: bool) -> Result<Self> {
        let mut path = path.into();
        if path.is_relative() {
            path = std::env::current_dir()?.join(path);
        }
        if !path.is_file() {
            return Err(CoreError::MissingFile(path).into());
        }
        Ok(FileDateSpecSource { path, quiet })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DateSpecSource for FileDateSpecSource {
    fn load(&self) -> Result<Vec<DateRecord>> {
        // read_to_string rejects invalid UTF-8
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read date file {}", self.path.display()))?;
        let records = parser::parse(&text, self.quiet);
        debug!(path = %self.path.display(), count = records.len(), "loaded date file");
        Ok(records)
    }
}
