/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// the one validated form field
pub const EMAIL_FIELD: &str = "email";

/// inline messages shown next to the email input
pub const EMAIL_REQUIRED_MESSAGE: &str = "Please enter an email.";
pub const EMAIL_INVALID_MESSAGE: &str = "Email is not valid!";

/// analytics event category for the subscribe box
pub const SUBSCRIBE_EVENT_CATEGORY: &str = "subscribe-form";
