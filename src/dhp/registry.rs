//! # Record Store
//!
//! [`Registry`] owns the in-memory patient collection and the next-id counter, and
//! keeps both in step with a [`DataStore`]. It is built once at startup and handed to
//! whoever drives it; there is no global state.
//!
//! Every mutation follows the same cycle: reload the full collection, change it,
//! write the full collection back. An update or delete therefore sees whatever is in
//! the backing file at that moment, not what was loaded earlier.
//!
//! Ids are assigned by the registry and never reused within a process: after a load,
//! the counter is the larger of its current value and `max(id) + 1`.

use crate::error::{DhpError, Result};
use crate::model::{NewPatient, Patient, PatientUpdate};
use crate::store::DataStore;
use crate::validation::{
    calculate_age, validate_date_of_birth, validate_new_patient, validate_phone_number,
};

pub struct Registry<S: DataStore> {
    store: S,
    patients: Vec<Patient>,
    next_id: u32,
}

impl<S: DataStore> Registry<S> {
    /// An empty registry; nothing is read until [`Registry::load`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            patients: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a registry and load the backing store.
    pub fn open(store: S) -> Result<Self> {
        let mut registry = Self::new(store);
        registry.load()?;
        Ok(registry)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The collection as last loaded or saved.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn load(&mut self) -> Result<&[Patient]> {
        self.patients = self.store.load()?;
        let after_max = self
            .patients
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(1, |max| max + 1);
        self.next_id = self.next_id.max(after_max);
        Ok(&self.patients)
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.patients)
    }

    /// Linear scan of the loaded collection. Does not reload.
    pub fn find_by_id(&self, id: u32) -> Result<&Patient> {
        self.patients
            .iter()
            .find(|p| p.id == id)
            .ok_or(DhpError::PatientNotFound(id.into()))
    }

    pub fn add(&mut self, fields: &NewPatient) -> Result<Patient> {
        let fields = validate_new_patient(fields)?;
        self.load()?;

        let patient = Patient {
            id: self.next_id,
            age: calculate_age(&fields.date_of_birth),
            first_name: fields.first_name,
            last_name: fields.last_name,
            date_of_birth: fields.date_of_birth,
            hometown: fields.hometown,
            house_number: fields.house_number,
            phone_number: fields.phone_number,
        };
        self.patients.push(patient.clone());
        self.next_id += 1;
        self.save()?;

        log::info!("added patient {} ({})", patient.id, patient.full_name());
        Ok(patient)
    }

    pub fn update(&mut self, id: u32, changes: &PatientUpdate) -> Result<Patient> {
        self.load()?;
        let position = self.position(id)?;

        let mut candidate = changes.apply_to(&self.patients[position]);
        validate_date_of_birth(&candidate.date_of_birth)?;
        validate_phone_number(&candidate.phone_number)?;
        candidate.age = calculate_age(&candidate.date_of_birth);

        self.patients[position] = candidate.clone();
        self.save()?;

        log::info!("updated patient {}", id);
        Ok(candidate)
    }

    pub fn delete(&mut self, id: u32) -> Result<Patient> {
        self.load()?;
        let position = self.position(id)?;
        let removed = self.patients.remove(position);
        self.save()?;

        log::info!("deleted patient {}", id);
        Ok(removed)
    }

    /// Reload and return every patient in stored order.
    pub fn list_all(&mut self) -> Result<&[Patient]> {
        self.load()
    }

    fn position(&self, id: u32) -> Result<usize> {
        self.patients.iter().position(|p| p.id == id).ok_or_else(|| {
            log::debug!("no patient with id {}", id);
            DhpError::PatientNotFound(id.into())
        })
    }
}
