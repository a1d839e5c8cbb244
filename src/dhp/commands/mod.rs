//! # Command Layer
//!
//! One module per registry operation. Each `run` drives the [`Registry`] and returns a
//! [`CmdResult`]: the patients it touched or listed plus messages for the operator.
//!
//! Operator mistakes (bad formats, blank fields, unknown ids) come back as
//! `Ok(CmdResult)` carrying an error message. Storage failures come back as `Err`.
//!
//! [`Registry`]: crate::registry::Registry

use crate::error::DhpError;
use crate::model::Patient;

pub mod add;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_patients: Vec<Patient>,
    pub listed_patients: Vec<Patient>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_affected_patients(mut self, patients: Vec<Patient>) -> Self {
        self.affected_patients = patients;
        self
    }

    pub fn with_listed_patients(mut self, patients: Vec<Patient>) -> Self {
        self.listed_patients = patients;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// A result that only reports why the operation did not happen.
    pub fn rejected(error: &DhpError) -> Self {
        Self::default().with_message(CmdMessage::error(error.to_string()))
    }

    pub fn is_rejected(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
