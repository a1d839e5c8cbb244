use crate::commands::CmdResult;
use crate::error::{DhpError, Result};

/// Parse operator input as a patient id.
///
/// A number too large to ever have been assigned is reported as not found.
pub fn parse_id(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let wide: u64 = trimmed
        .parse()
        .map_err(|_| DhpError::NonNumericId(trimmed.to_string()))?;
    u32::try_from(wide).map_err(|_| DhpError::PatientNotFound(wide))
}

/// Turn recoverable failures into a rejected [`CmdResult`]; pass the rest through.
pub fn recover<T>(outcome: Result<T>, on_success: impl FnOnce(T) -> CmdResult) -> Result<CmdResult> {
    match outcome {
        Ok(value) => Ok(on_success(value)),
        Err(e) if e.is_recoverable() => Ok(CmdResult::rejected(&e)),
        Err(e) => Err(e),
    }
}
