use thiserror::Error;

use crate::core::counter::SubscriptionId;

#[derive(Debug, Error)]
pub enum CounterError {
    #[error("no observer registered under {0}")]
    UnknownSubscription(SubscriptionId),

    #[error("invalid counter snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
