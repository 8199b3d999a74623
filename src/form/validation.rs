use crate::constant::EMAIL_FIELD;
use crate::domain::{InvalidReason, SubscriberEmail};

/// Run the validator registered for `name`, if any.
///
/// Only the email field carries a validator; unknown fields always pass.
pub fn validate_field(name: &str, value: &str) -> Result<(), InvalidReason> {
    match name {
        EMAIL_FIELD => SubscriberEmail::parse(value.to_owned()).map(|_| ()),
        _ => Ok(()),
    }
}
