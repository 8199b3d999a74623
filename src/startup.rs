use crate::analytics::TracingEvents;
use crate::configuration::Settings;
use crate::constant::EMAIL_FIELD;
use crate::error::SubscribeError;
use crate::form::{FormController, FormState, SubmissionPhase};
use crate::provider::MailchimpClient;
use crate::subscription;

/// A fully wired subscribe form: controller, provider client and event sink.
pub struct Application {
    controller: FormController,
    provider: MailchimpClient,
    events: TracingEvents,
}

impl Application {
    pub fn build(config: Settings) -> Self {
        // Build a `MailchimpClient` using `configuration`
        let timeout = config.mailchimp.timeout();
        let provider = MailchimpClient::new(
            config.mailchimp.action_url,
            config.mailchimp.email_field_name,
            config.mailchimp.hidden_field_name,
            timeout,
        );
        let controller = FormController::new(FormState::with_fields([EMAIL_FIELD]));

        Self {
            controller,
            provider,
            events: TracingEvents,
        }
    }

    /// Type `raw_email` into the form and submit it once.
    pub async fn subscribe(&mut self, raw_email: &str) -> Result<SubmissionPhase, SubscribeError> {
        self.controller.on_change(EMAIL_FIELD, raw_email);
        subscription::subscribe(&mut self.controller, &self.provider, &self.events).await
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }
}
