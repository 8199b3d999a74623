use crate::constant::{EMAIL_INVALID_MESSAGE, EMAIL_REQUIRED_MESSAGE};
use std::fmt::{Display, Formatter};

/// Why a field value was rejected at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    EmailIsEmpty,
    EmailMissingAtSymbol,
    EmailMissingSubject,
    EmailMissingDomain,
    EmailFormatWrong,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::EmailIsEmpty => "Email is empty",
            InvalidReason::EmailMissingAtSymbol => "Email missing @ symbol",
            InvalidReason::EmailMissingSubject => "Email missing subject",
            InvalidReason::EmailMissingDomain => "Email missing domain",
            InvalidReason::EmailFormatWrong => "Email's format is not correct",
        }
    }

    /// The message rendered inline next to the offending field.
    pub fn ui_message(&self) -> &'static str {
        match self {
            InvalidReason::EmailIsEmpty => EMAIL_REQUIRED_MESSAGE,
            _ => EMAIL_INVALID_MESSAGE,
        }
    }
}

impl Display for InvalidReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
