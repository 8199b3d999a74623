use crate::domain::InvalidReason;
use crate::util;
use once_cell::sync::Lazy;
use regex::Regex;

// Accepted address shape: a plain or quoted local part, then either a
// bracketed IPv4 literal or dot-separated DNS labels ending in an alphabetic
// top-level label of at least two letters.
static VALID_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("the email pattern is a valid regex")
});

#[derive(Debug, Clone)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(email: String) -> Result<Self, InvalidReason> {
        if util::is_blank(&email) {
            return Err(InvalidReason::EmailIsEmpty);
        }

        if !email.contains('@') {
            return Err(InvalidReason::EmailMissingAtSymbol);
        }

        let split = email.rsplitn(2, '@').collect::<Vec<&str>>();
        // domain part
        if split[0].is_empty() {
            return Err(InvalidReason::EmailMissingDomain);
        }
        // user part
        if split[1].is_empty() {
            return Err(InvalidReason::EmailMissingSubject);
        }

        if !VALID_EMAIL.is_match(&email) {
            return Err(InvalidReason::EmailFormatWrong);
        }

        Ok(Self(email))
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
