use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::model::work_pattern::WorkPattern;

const CONFIG_DIR_NAME: &str = "workdays";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings read from `config.toml`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Weekday names counted as worked. Defaults to Monday through Friday.
    #[serde(default)]
    pub work_days: Option<Vec<String>>,
    #[serde(default)]
    pub holidays_file: Option<PathBuf>,
    #[serde(default)]
    pub vacations_file: Option<PathBuf>,
}

impl Config {
    /// `<config_dir>/workdays/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config at `path`, or the default location when `None`.
    ///
    /// An explicit path must exist; a missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => match Self::default_path() {
                Some(p) if p.is_file() => Self::from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    fn resolve_paths(&mut self, base: &Path) {
        for p in [&mut self.holidays_file, &mut self.vacations_file].into_iter().flatten() {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
    }

    pub fn work_pattern(&self) -> Result<WorkPattern> {
        match &self.work_days {
            Some(names) if names.is_empty() => Err(anyhow!("work_days must not be empty")),
            Some(names) => Ok(WorkPattern::from_names(names.as_slice())?),
            None => Ok(WorkPattern::default()),
        }
    }
}
