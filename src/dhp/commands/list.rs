use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;
use crate::store::DataStore;

pub fn run<S: DataStore>(registry: &mut Registry<S>) -> Result<CmdResult> {
    let patients = registry.list_all()?.to_vec();
    if patients.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No patients found.")));
    }
    Ok(CmdResult::default().with_listed_patients(patients))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::NewPatient;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_insertion_order() {
        let mut registry = Registry::new(InMemoryStore::new());
        for name in ["Yaw", "Abena"] {
            let fields = NewPatient {
                first_name: name.into(),
                last_name: "Asante".into(),
                date_of_birth: "02-03-1985".into(),
                hometown: "Ho".into(),
                house_number: "3".into(),
                phone_number: "050-123-4567".into(),
            };
            add::run(&mut registry, &fields).unwrap();
        }

        let result = run(&mut registry).unwrap();
        let names: Vec<_> = result
            .listed_patients
            .iter()
            .map(|p| p.first_name.as_str())
            .collect();
        assert_eq!(names, vec!["Yaw", "Abena"]);
    }

    #[test]
    fn empty_registry_says_so() {
        let mut registry = Registry::new(InMemoryStore::new());
        let result = run(&mut registry).unwrap();
        assert!(result.listed_patients.is_empty());
        assert_eq!(result.messages[0].content, "No patients found.");
    }
}
