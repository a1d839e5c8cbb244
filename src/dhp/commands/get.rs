use crate::commands::CmdResult;
use crate::error::Result;
use crate::registry::Registry;
use crate::store::DataStore;

use super::helpers::recover;

/// Reload, then look a patient up by id.
pub fn run<S: DataStore>(registry: &mut Registry<S>, id: u32) -> Result<CmdResult> {
    registry.load()?;
    recover(registry.find_by_id(id).cloned(), |patient| {
        CmdResult::default().with_listed_patients(vec![patient])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Patient;
    use crate::store::memory::InMemoryStore;

    fn stored(id: u32) -> Patient {
        Patient {
            id,
            first_name: "Esi".into(),
            last_name: "Quaye".into(),
            date_of_birth: "10-10-1970".into(),
            age: 54,
            hometown: "Tema".into(),
            house_number: "C4".into(),
            phone_number: "027-555-0101".into(),
        }
    }

    #[test]
    fn finds_patient_written_by_someone_else() {
        let mut registry = Registry::new(InMemoryStore::with_patients(vec![stored(7)]));
        let result = run(&mut registry, 7).unwrap();
        assert_eq!(result.listed_patients, vec![stored(7)]);
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut registry = Registry::new(InMemoryStore::with_patients(vec![stored(7)]));
        let result = run(&mut registry, 8).unwrap();
        assert!(result.listed_patients.is_empty());
        assert_eq!(result.messages[0].content, "No patient found with ID 8.");
    }
}
