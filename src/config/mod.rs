//! Reporting configuration: tunables for the engine plus JSON persistence.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Engine tunables. Defaults match the production report surface: ten top
/// rooms and a 2020-2030 accepted period range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportingConfig {
    #[serde(default = "ReportingConfig::default_top_rooms_limit")]
    pub top_rooms_limit: usize,
    #[serde(default = "ReportingConfig::default_min_report_year")]
    pub min_report_year: i32,
    #[serde(default = "ReportingConfig::default_max_report_year")]
    pub max_report_year: i32,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            top_rooms_limit: Self::default_top_rooms_limit(),
            min_report_year: Self::default_min_report_year(),
            max_report_year: Self::default_max_report_year(),
        }
    }
}

impl ReportingConfig {
    fn default_top_rooms_limit() -> usize {
        10
    }

    fn default_min_report_year() -> i32 {
        crate::domain::MIN_REPORT_YEAR
    }

    fn default_max_report_year() -> i32 {
        crate::domain::MAX_REPORT_YEAR
    }
}

/// Handles persistence for [`ReportingConfig`]. A missing file yields the
/// defaults; saves go through a temp file and rename.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ReportingConfig, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(ReportingConfig::default())
        }
    }

    pub fn save(&self, config: &ReportingConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".");
    tmp.push(TMP_SUFFIX);
    PathBuf::from(tmp)
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
