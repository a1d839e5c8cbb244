use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;
use crate::store::DataStore;

use super::helpers::recover;

pub fn run<S: DataStore>(registry: &mut Registry<S>, id: u32) -> Result<CmdResult> {
    recover(registry.delete(id), |patient| {
        CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Patient with ID {} deleted successfully!",
                patient.id
            )))
            .with_affected_patients(vec![patient])
    })
}
