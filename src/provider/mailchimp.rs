use crate::domain::SubscriberEmail;
use crate::error::BizErrorEnum;
use crate::provider::{SubscribeResponse, SubscriptionProvider};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

/// Client for a Mailchimp embedded-signup endpoint.
#[derive(Debug)]
pub struct MailchimpClient {
    http_client: Client,
    action_url: String,
    email_field_name: String,
    hidden_field_name: String,
}

impl MailchimpClient {
    pub fn new(
        action_url: String,
        email_field_name: String,
        hidden_field_name: String,
        timeout: Duration,
    ) -> Self {
        let http_client = Client::builder()
            // timeout is a MUST option for client
            .timeout(timeout)
            .build()
            .unwrap();
        MailchimpClient {
            http_client,
            action_url,
            email_field_name,
            hidden_field_name,
        }
    }
}

#[async_trait]
impl SubscriptionProvider for MailchimpClient {
    async fn subscribe(&self, email: &SubscriberEmail) -> Result<SubscribeResponse, BizErrorEnum> {
        let url = Url::parse(&self.action_url).map_err(|e| {
            tracing::error!("Failed to parse url: url={}, e={:?}", &self.action_url, e);
            BizErrorEnum::ParseUrlError
        })?;

        // The signup endpoint expects the classic embedded-form fields: the
        // address itself plus the list's hidden anti-bot field, left blank.
        let form_body = [
            (self.email_field_name.as_str(), email.as_ref()),
            (self.hidden_field_name.as_str(), ""),
        ];
        let response = self
            .http_client
            .post(url)
            .form(&form_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send subscribe request: {:?}", e);
                BizErrorEnum::SubscribeRequestError(e)
            })?
            .error_for_status()?
            .json::<SubscribeResponse>()
            .await?;
        Ok(response)
    }
}
