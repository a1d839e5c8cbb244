use crate::model::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DhpError {
    #[error("Invalid {} format. Use {}.", .field.noun(), .expected)]
    Format { field: Field, expected: &'static str },

    #[error("Invalid date. Please check the day, month, and year.")]
    Calendar(String),

    #[error("{0} cannot be empty.")]
    EmptyField(Field),

    #[error("No patient found with ID {0}.")]
    PatientNotFound(u64),

    #[error("Invalid ID. Please enter a numeric ID.")]
    NonNumericId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl DhpError {
    /// Errors the operator can fix by retrying with different input.
    ///
    /// Everything else (I/O, a malformed backing file) is fatal to the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DhpError::Format { .. }
                | DhpError::Calendar(_)
                | DhpError::EmptyField(_)
                | DhpError::PatientNotFound(_)
                | DhpError::NonNumericId(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DhpError>;
