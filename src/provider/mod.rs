mod mailchimp;

pub use mailchimp::MailchimpClient;

use crate::domain::SubscriberEmail;
use crate::error::BizErrorEnum;
use async_trait::async_trait;
use serde::Deserialize;

/// Terminal verdict of a subscribe request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscribeResult {
    Success,
    Error,
}

/// Body the provider answers a subscribe request with.
#[derive(Debug, Deserialize)]
pub struct SubscribeResponse {
    pub result: SubscribeResult,
    pub msg: String,
}

/// A mailing-list service that can accept one subscription request.
///
/// The service is opaque to the form: it either reports a verdict or the
/// transport fails, and in both cases the local field state stays as typed.
#[async_trait]
pub trait SubscriptionProvider {
    async fn subscribe(&self, email: &SubscriberEmail) -> Result<SubscribeResponse, BizErrorEnum>;
}
