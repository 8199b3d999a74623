use crate::analytics::EventSink;
use crate::constant::SUBSCRIBE_EVENT_CATEGORY;
use crate::error::SubscribeError;
use crate::form::{FormController, SubmissionPhase, SubmitOutcome};
use crate::provider::{SubscribeResult, SubscriptionProvider};

/// Drive one submit of the subscribe form end to end.
///
/// Validation runs first; the provider is reached only when every field
/// passes, and it is invoked at most once per accepted submit. A provider
/// failure leaves the field state as typed and parks the form in
/// `SubmissionPhase::Failed` until the user resubmits by hand.
#[tracing::instrument(
    name = "Submitting the subscribe form",
    skip(controller, provider, events)
)]
pub async fn subscribe<P>(
    controller: &mut FormController,
    provider: &P,
    events: &dyn EventSink,
) -> Result<SubmissionPhase, SubscribeError>
where
    P: SubscriptionProvider,
{
    let email = match controller.on_submit() {
        SubmitOutcome::Accepted(email) => email,
        SubmitOutcome::ValidationFailed(reason) => {
            events.log_event(SUBSCRIBE_EVENT_CATEGORY, "invalid", Some(reason.as_str()));
            return Err(SubscribeError::ValidationError(reason));
        }
        SubmitOutcome::AlreadyAccepted => {
            // The submit trigger should be disabled while a request is in
            // flight; a stray extra trigger must not reach the provider.
            return Ok(controller.phase());
        }
    };

    events.log_event(SUBSCRIBE_EVENT_CATEGORY, "submit", Some(email.as_ref()));

    match provider.subscribe(&email).await {
        Ok(response) => {
            tracing::info!(result = ?response.result, msg = %response.msg, "Provider answered");
            let phase = controller.resolve_submission(response.result);
            let action = if phase == SubmissionPhase::Succeeded {
                "success"
            } else {
                "error"
            };
            events.log_event(SUBSCRIBE_EVENT_CATEGORY, action, None);
            Ok(phase)
        }
        Err(error) => {
            tracing::error!("Failed to reach the mailing-list provider: {:?}", error);
            controller.resolve_submission(SubscribeResult::Error);
            events.log_event(SUBSCRIBE_EVENT_CATEGORY, "error", None);
            Err(SubscribeError::ProviderError(error))
        }
    }
}
