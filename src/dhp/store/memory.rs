use super::DataStore;
use crate::error::Result;
use crate::model::Patient;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    patients: Vec<Patient>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patients(patients: Vec<Patient>) -> Self {
        Self { patients, saves: 0 }
    }

    /// How many times the collection has been written.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Replace the stored collection behind the registry's back.
    pub fn overwrite(&mut self, patients: Vec<Patient>) {
        self.patients = patients;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Patient>> {
        Ok(self.patients.clone())
    }

    fn save(&mut self, patients: &[Patient]) -> Result<()> {
        self.patients = patients.to_vec();
        self.saves += 1;
        Ok(())
    }
}
