use crate::error::{DhpError, Result};
use crate::model::Encoding;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "dhp.json";
const DEFAULT_CSV_FILE: &str = "patients.csv";
const DEFAULT_JSON_FILE: &str = "patients.json";

/// Configuration for dhp, stored in `dhp.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DhpConfig {
    /// File name of the tabular store
    #[serde(default = "default_csv_file")]
    pub csv_file: String,

    /// File name of the structured-document store
    #[serde(default = "default_json_file")]
    pub json_file: String,

    /// Encoding to use without asking at startup
    #[serde(default)]
    pub storage: Option<Encoding>,
}

fn default_csv_file() -> String {
    DEFAULT_CSV_FILE.to_string()
}

fn default_json_file() -> String {
    DEFAULT_JSON_FILE.to_string()
}

impl Default for DhpConfig {
    fn default() -> Self {
        Self {
            csv_file: default_csv_file(),
            json_file: default_json_file(),
            storage: None,
        }
    }
}

impl DhpConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DhpError::Io)?;
        let config: DhpConfig =
            serde_json::from_str(&content).map_err(DhpError::Serialization)?;
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Path of the backing file for `encoding` under `data_dir`.
    pub fn data_file(&self, data_dir: &Path, encoding: Encoding) -> PathBuf {
        match encoding {
            Encoding::Csv => data_dir.join(&self.csv_file),
            Encoding::Json => data_dir.join(&self.json_file),
        }
    }
}
