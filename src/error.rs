use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::EventTypeToken;

#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuditPolicyError {
    #[error("event type '{0}' cannot be combined with other event types")]
    InvalidEventTypeSet(EventTypeToken),

    #[error("invalid event type: {0}")]
    InvalidEventType(String),

    #[error("invalid storage key kind: {0} (expected Primary or Secondary)")]
    InvalidStorageKeyKind(String),

    #[error("invalid storage account name: {0}")]
    InvalidStorageAccountName(String),

    #[error("event type '{0}' is a shorthand and has no audit event mapping")]
    NotCanonical(EventTypeToken),

    #[error("Poisoned lock error: {0}")]
    PoisonedLockError(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl<T> From<std::sync::PoisonError<T>> for AuditPolicyError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        AuditPolicyError::PoisonedLockError(err.to_string())
    }
}
