/// Where a mounted form sits in its submission lifecycle.
///
/// `Succeeded` and `Failed` are dead ends for the user: the form has to be
/// explicitly reset before another submission can be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    /// The validation gate opened and the provider call is in flight.
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionPhase::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionPhase::Succeeded | SubmissionPhase::Failed)
    }
}
