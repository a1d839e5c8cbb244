//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every registry
//! operation, whatever drives it. It parses operator-typed ids and dispatches; the
//! logic lives in `commands/*.rs` and `registry.rs`.
//!
//! `DhpApi<S: DataStore>` is generic over the backend: `DhpApi<FileStore>` in the
//! binary, `DhpApi<InMemoryStore>` in tests.

use crate::commands;
use crate::commands::helpers::parse_id;
use crate::error::Result;
use crate::model::{NewPatient, PatientUpdate};
use crate::registry::Registry;
use crate::store::DataStore;

pub struct DhpApi<S: DataStore> {
    registry: Registry<S>,
}

impl<S: DataStore> DhpApi<S> {
    pub fn new(registry: Registry<S>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    /// Reload and report whether there is anything to search, update or delete.
    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.registry.list_all()?.is_empty())
    }

    pub fn add_patient(&mut self, fields: &NewPatient) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.registry, fields)
    }

    pub fn list_patients(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.registry)
    }

    pub fn get_patient(&mut self, id_input: &str) -> Result<commands::CmdResult> {
        match parse_id(id_input) {
            Ok(id) => commands::get::run(&mut self.registry, id),
            Err(e) => Ok(commands::CmdResult::rejected(&e)),
        }
    }

    pub fn update_patient(
        &mut self,
        id: u32,
        changes: &PatientUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.registry, id, changes)
    }

    pub fn delete_patient(&mut self, id_input: &str) -> Result<commands::CmdResult> {
        match parse_id(id_input) {
            Ok(id) => commands::delete::run(&mut self.registry, id),
            Err(e) => Ok(commands::CmdResult::rejected(&e)),
        }
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> DhpApi<InMemoryStore> {
        DhpApi::new(Registry::new(InMemoryStore::new()))
    }

    fn fields() -> NewPatient {
        NewPatient {
            first_name: "Efua".into(),
            last_name: "Sutherland".into(),
            date_of_birth: "27-06-1924".into(),
            hometown: "Cape Coast".into(),
            house_number: "12A".into(),
            phone_number: "033-212-0000".into(),
        }
    }

    #[test]
    fn non_numeric_id_is_rejected_without_lookup() {
        let mut api = api();
        api.add_patient(&fields()).unwrap();
        let result = api.get_patient("one").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Invalid ID. Please enter a numeric ID."
        );
        let result = api.delete_patient("x1").unwrap();
        assert!(result.is_rejected());
        assert_eq!(api.registry().patients().len(), 1);
    }

    #[test]
    fn dispatches_by_parsed_id() {
        let mut api = api();
        assert!(api.is_empty().unwrap());
        api.add_patient(&fields()).unwrap();
        assert!(!api.is_empty().unwrap());

        let found = api.get_patient(" 1 ").unwrap();
        assert_eq!(found.listed_patients[0].first_name, "Efua");
        assert!(api.get_patient("2").unwrap().listed_patients.is_empty());

        let result = api.delete_patient("1").unwrap();
        assert_eq!(result.affected_patients.len(), 1);
        assert!(api.list_patients().unwrap().listed_patients.is_empty());
    }
}
