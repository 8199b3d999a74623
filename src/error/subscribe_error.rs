use crate::domain::InvalidReason;
use crate::error::BizErrorEnum;
use std::fmt::{Debug, Formatter};

/// Everything that can go wrong while driving one submit of the form.
///
/// A validation failure never reaches the provider; a provider failure never
/// touches the local field state.
#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("{0}")]
    ValidationError(InvalidReason),

    #[error("Failed to deliver the subscription to the mailing-list provider.")]
    ProviderError(#[source] BizErrorEnum),
}

// We are using a bespoke implementation of `Debug`
// to get a nice report using the error source chain
impl Debug for SubscribeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
