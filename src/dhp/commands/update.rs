use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PatientUpdate;
use crate::registry::Registry;
use crate::store::DataStore;

use super::helpers::recover;

pub fn run<S: DataStore>(
    registry: &mut Registry<S>,
    id: u32,
    changes: &PatientUpdate,
) -> Result<CmdResult> {
    recover(registry.update(id, changes), |patient| {
        CmdResult::default()
            .with_message(CmdMessage::success("Patient updated successfully!"))
            .with_affected_patients(vec![patient])
    })
}
