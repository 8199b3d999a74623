mod invalid_reason;
mod subscriber_email;

pub use invalid_reason::InvalidReason;
pub use subscriber_email::SubscriberEmail;
