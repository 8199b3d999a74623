use crate::constant::EMAIL_FIELD;
use crate::domain::{InvalidReason, SubscriberEmail};
use crate::form::validation;
use crate::form::{FormState, SubmissionPhase};
use crate::provider::SubscribeResult;

/// What a submit trigger amounted to.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Every validator passed; the submission callback may now fire, once.
    Accepted(SubscriberEmail),
    /// At least one field was rejected; inline messages are in the form state.
    ValidationFailed(InvalidReason),
    /// The gate already opened for an earlier trigger; this one is ignored.
    AlreadyAccepted,
}

/// Owns the field state and the submission lifecycle of one mounted form.
///
/// All mutation goes through `on_change`, `on_submit`, `resolve_submission`
/// and `reset`; every update swaps in a freshly built `FormState` snapshot.
pub struct FormController {
    inputs: FormState,
    phase: SubmissionPhase,
}

impl FormController {
    /// `initial` must contain an entry for every field the form will render.
    pub fn new(initial: FormState) -> Self {
        Self {
            inputs: initial,
            phase: SubmissionPhase::Idle,
        }
    }

    pub fn inputs(&self) -> &FormState {
        &self.inputs
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Record a keystroke: replace the field's value and clear its inline
    /// error. Other fields are untouched.
    pub fn on_change(&mut self, field: &str, value: &str) {
        self.inputs = self.inputs.with_value(field, value);
    }

    /// Run the validation gate.
    ///
    /// On success the phase moves to `Pending`, which keeps the gate shut for
    /// any further trigger until `resolve_submission` or `reset` runs.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        if self.phase != SubmissionPhase::Idle {
            tracing::warn!(phase = ?self.phase, "Submit trigger ignored");
            return SubmitOutcome::AlreadyAccepted;
        }

        let mut next = self.inputs.clone();
        let mut failed: Option<InvalidReason> = None;
        for (name, field) in self.inputs.iter() {
            if let Err(reason) = validation::validate_field(name, &field.value) {
                tracing::info!(field = name, reason = reason.as_str(), "Field failed validation");
                next = next.with_error(name, reason.ui_message());
                failed.get_or_insert(reason);
            }
        }
        if let Some(reason) = failed {
            self.inputs = next;
            return SubmitOutcome::ValidationFailed(reason);
        }

        match self.inputs.value(EMAIL_FIELD) {
            Some(raw) => match SubscriberEmail::parse(raw.to_owned()) {
                Ok(email) => {
                    self.phase = SubmissionPhase::Pending;
                    SubmitOutcome::Accepted(email)
                }
                Err(reason) => {
                    self.inputs = self.inputs.with_error(EMAIL_FIELD, reason.ui_message());
                    SubmitOutcome::ValidationFailed(reason)
                }
            },
            None => {
                tracing::warn!("No email field is registered on this form");
                SubmitOutcome::ValidationFailed(InvalidReason::EmailIsEmpty)
            }
        }
    }

    /// The provider answered: move `Pending` to its terminal phase.
    ///
    /// Outside `Pending` the verdict is stale and gets dropped.
    pub fn resolve_submission(&mut self, result: SubscribeResult) -> SubmissionPhase {
        if !self.phase.is_pending() {
            tracing::warn!(phase = ?self.phase, "Dropping a provider verdict for a form that is not pending");
            return self.phase;
        }
        self.phase = match result {
            SubscribeResult::Success => SubmissionPhase::Succeeded,
            SubscribeResult::Error => SubmissionPhase::Failed,
        };
        self.phase
    }

    /// Clear every field and re-arm the form for a fresh submission.
    pub fn reset(&mut self) {
        self.inputs = self.inputs.cleared();
        self.phase = SubmissionPhase::Idle;
    }
}
