use std::path::{Path, PathBuf};

use greencalc_parser::TableKind;
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, Result};

pub const DATA_DIR_ENV: &str = "GREENCALC_DATA_DIR";
pub const DEFAULT_CONFIG_FILE: &str = "greencalc.toml";

/// Where the four reference tables live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreencalcConfig {
    pub data_dir: PathBuf,
    pub cpu_file: String,
    pub gpu_file: String,
    pub location_file: String,
    pub pue_file: String,
}

impl Default for GreencalcConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            cpu_file: "CPUs-manual.csv".to_string(),
            gpu_file: "GPUs-manual.csv".to_string(),
            location_file: "CI-carbonfootprint-yearly_2023.csv".to_string(),
            pue_file: "default-PUE_2024.csv".to_string(),
        }
    }
}

impl GreencalcConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GreencalcConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reads `explicit` if given, else `greencalc.toml` in the working directory when it
    /// exists, else the defaults. `GREENCALC_DATA_DIR` then overrides `data_dir`.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(config.with_data_dir_override(std::env::var(DATA_DIR_ENV).ok()))
    }

    pub fn with_data_dir_override(mut self, data_dir: Option<String>) -> Self {
        if let Some(dir) = data_dir.filter(|dir| !dir.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    pub fn file_name(&self, table: TableKind) -> &str {
        match table {
            TableKind::Cpu => &self.cpu_file,
            TableKind::Gpu => &self.gpu_file,
            TableKind::Location => &self.location_file,
            TableKind::Pue => &self.pue_file,
        }
    }

    pub fn table_path(&self, table: TableKind) -> PathBuf {
        self.data_dir.join(self.file_name(table))
    }

    fn validate(&self) -> Result<()> {
        for table in TableKind::ALL {
            if self.file_name(table).trim().is_empty() {
                return Err(LoadError::Config(format!(
                    "{table}_file must not be empty"
                )));
            }
        }
        Ok(())
    }
}
