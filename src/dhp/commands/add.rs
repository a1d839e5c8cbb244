use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewPatient;
use crate::registry::Registry;
use crate::store::DataStore;

use super::helpers::recover;

pub fn run<S: DataStore>(registry: &mut Registry<S>, fields: &NewPatient) -> Result<CmdResult> {
    recover(registry.add(fields), |patient| {
        CmdResult::default()
            .with_message(CmdMessage::success("Patient added successfully!"))
            .with_affected_patients(vec![patient])
    })
}
