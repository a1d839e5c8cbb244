//! # Storage Layer
//!
//! The [`DataStore`] trait is the load/save contract every backend fulfils: the whole
//! collection is read at once and written back at once. There is no incremental append;
//! a save replaces the backing file.
//!
//! ## Implementations
//!
//! - [`tabular::CsvStore`]: header row plus one row per patient (`patients.csv`)
//! - [`document::JsonStore`]: pretty-printed array of patient objects (`patients.json`)
//! - [`FileStore`]: the closed choice between the two, fixed when it is built
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! A missing backing file loads as an empty collection. Anything unreadable
//! (wrong shape, missing columns, non-integer ids, duplicate ids) is an error; the
//! store never tries to salvage part of a file.

use crate::error::{DhpError, Result};
use crate::model::{Encoding, Patient};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub mod document;
pub mod memory;
pub mod tabular;

use document::JsonStore;
use tabular::CsvStore;

pub trait DataStore {
    /// Read every stored patient, in stored order.
    fn load(&self) -> Result<Vec<Patient>>;

    /// Replace the stored collection with `patients`.
    fn save(&mut self, patients: &[Patient]) -> Result<()>;
}

/// A file-backed store in one of the two supported encodings.
pub enum FileStore {
    Csv(CsvStore),
    Json(JsonStore),
}

impl FileStore {
    pub fn open(encoding: Encoding, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match encoding {
            Encoding::Csv => FileStore::Csv(CsvStore::new(path)),
            Encoding::Json => FileStore::Json(JsonStore::new(path)),
        }
    }

    pub fn encoding(&self) -> Encoding {
        match self {
            FileStore::Csv(_) => Encoding::Csv,
            FileStore::Json(_) => Encoding::Json,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FileStore::Csv(store) => store.path(),
            FileStore::Json(store) => store.path(),
        }
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Patient>> {
        match self {
            FileStore::Csv(store) => store.load(),
            FileStore::Json(store) => store.load(),
        }
    }

    fn save(&mut self, patients: &[Patient]) -> Result<()> {
        match self {
            FileStore::Csv(store) => store.save(patients),
            FileStore::Json(store) => store.save(patients),
        }
    }
}

/// Read the backing file, or `None` if it does not exist yet.
fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("{} does not exist yet, starting empty", path.display());
            Ok(None)
        }
        Err(e) => Err(DhpError::Io(e)),
    }
}

/// Replace the backing file, creating its directory if needed.
fn write_whole(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(DhpError::Io)?;
        }
    }
    fs::write(path, content).map_err(DhpError::Io)?;
    Ok(())
}

fn ensure_unique_ids(path: &Path, patients: &[Patient]) -> Result<()> {
    let mut seen = HashSet::with_capacity(patients.len());
    for patient in patients {
        if !seen.insert(patient.id) {
            return Err(DhpError::Store(format!(
                "{} contains patient id {} more than once",
                path.display(),
                patient.id
            )));
        }
    }
    Ok(())
}
