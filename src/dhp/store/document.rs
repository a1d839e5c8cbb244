use super::{ensure_unique_ids, read_existing, write_whole, DataStore};
use crate::error::Result;
use crate::model::Patient;
use serde::Serialize;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Structured-document encoding: a JSON array of patient objects.
///
/// Output is pretty-printed with four-space indentation and no trailing newline, so
/// loading and saving an unmodified file reproduces it byte for byte.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(patients: &[Patient]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        patients.serialize(&mut ser)?;
        Ok(buf)
    }
}

impl DataStore for JsonStore {
    fn load(&self) -> Result<Vec<Patient>> {
        let Some(content) = read_existing(&self.path)? else {
            return Ok(Vec::new());
        };

        let patients: Vec<Patient> = serde_json::from_str(&content)?;
        ensure_unique_ids(&self.path, &patients)?;

        log::debug!("loaded {} patients from {}", patients.len(), self.path.display());
        Ok(patients)
    }

    fn save(&mut self, patients: &[Patient]) -> Result<()> {
        let bytes = Self::encode(patients)?;
        write_whole(&self.path, &bytes)?;
        log::debug!("wrote {} patients to {}", patients.len(), self.path.display());
        Ok(())
    }
}
