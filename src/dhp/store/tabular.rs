use super::{ensure_unique_ids, read_existing, write_whole, DataStore};
use crate::error::{DhpError, Result};
use crate::model::Patient;
use std::path::{Path, PathBuf};

/// Tabular encoding: a header row naming the patient fields, then one row per patient.
///
/// Every value is written as text, so `id` and `age` are parsed back to integers on load.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(patients: &[Patient]) -> Result<Vec<u8>> {
        // The header is written by hand so an empty collection still gets one.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(Patient::FIELDS)?;
        for patient in patients {
            writer.serialize(patient)?;
        }
        writer
            .into_inner()
            .map_err(|e| DhpError::Io(e.into_error()))
    }
}

impl DataStore for CsvStore {
    fn load(&self) -> Result<Vec<Patient>> {
        let Some(content) = read_existing(&self.path)? else {
            return Ok(Vec::new());
        };

        let mut reader = csv::Reader::from_reader(content.as_bytes());
        let patients = reader
            .deserialize::<Patient>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ama() -> Patient {
        Patient {
            id: 1,
            first_name: "Ama".into(),
            last_name: "Mensah".into(),
            date_of_birth: "15-06-2000".into(),
            age: 24,
            hometown: "Accra".into(),
            house_number: "H12".into(),
            phone_number: "024-000-0000".into(),
        }
    }

    #[test]
    fn writes_header_then_rows() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("patients.csv");
        let mut store = CsvStore::new(&path);
        store.save(&[ama()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("id,first_name,last_name,date_of_birth,age,hometown,house_number,phone_number")
        );
        assert_eq!(
            lines.next(),
            Some("1,Ama,Mensah,15-06-2000,24,Accra,H12,024-000-0000")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = CsvStore::new(temp.path().join("absent.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn empty_collection_keeps_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("patients.csv");
        let mut store = CsvStore::new(&path);
        store.save(&[ama()]).unwrap();
        store.save(&[]).unwrap();

        assert!(store.load().unwrap().is_empty());
        assert!(fs::read_to_string(&path).unwrap().starts_with("id,first_name"));
    }

    #[test]
    fn values_with_commas_survive() {
        let temp = TempDir::new().unwrap();
        let mut store = CsvStore::new(temp.path().join("patients.csv"));
        let mut patient = ama();
        patient.hometown = "Cape Coast, Central".into();
        store.save(&[patient.clone()]).unwrap();
        assert_eq!(store.load().unwrap(), vec![patient]);
    }

    #[test]
    fn non_integer_id_fails_fast() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("patients.csv");
        fs::write(
            &path,
            "id,first_name,last_name,date_of_birth,age,hometown,house_number,phone_number\n\
             one,Ama,Mensah,15-06-2000,24,Accra,H12,024-000-0000\n",
        )
        .unwrap();
        let err = CsvStore::new(&path).load().unwrap_err();
        assert!(matches!(err, DhpError::Csv(_)));
    }

    #[test]
    fn negative_age_rows_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("patients.csv");
        fs::write(
            &path,
            "id,first_name,last_name,date_of_birth,age,hometown,house_number,phone_number\n\
             1,Kofi,Boateng,01-01-2030,-4,Tema,T7,020-111-2222\n",
        )
        .unwrap();
        let loaded = CsvStore::new(&path).load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].age, -4);
    }

    #[test]
    fn missing_column_fails_fast() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("patients.csv");
        fs::write(&path, "id,first_name\n1,Ama\n").unwrap();
        assert!(CsvStore::new(&path).load().is_err());
    }
}
