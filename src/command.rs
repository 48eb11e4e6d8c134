//! The "set database auditing policy" command: user input applied to a
//! policy model, then persisted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AuditPolicyError;
use crate::resolver::resolve_event_types;
use crate::traits::AuditPolicyStore;
use crate::types::{
    AuditState, DatabaseAuditingPolicy, DatabaseTarget, EventTypeToken, StorageKeyKind,
    UseServerDefault, to_audit_event_types,
};

/// User input for setting the auditing policy of one database.
///
/// Every optional field left as `None` leaves the matching policy field
/// untouched. The struct deserializes from JSON, e.g.
/// `{"target": {...}, "event_types": ["All"], "pass_thru": true}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetDatabaseAuditPolicy {
    pub target: DatabaseTarget,
    #[serde(default)]
    pub event_types: Option<Vec<EventTypeToken>>,
    #[serde(default)]
    pub storage_account_name: Option<String>,
    #[serde(default)]
    pub storage_key_kind: Option<StorageKeyKind>,
    #[serde(default)]
    pub pass_thru: bool,
}

impl SetDatabaseAuditPolicy {
    pub fn new(target: DatabaseTarget) -> Self {
        SetDatabaseAuditPolicy {
            target,
            event_types: None,
            storage_account_name: None,
            storage_key_kind: None,
            pass_thru: false,
        }
    }

    pub fn with_event_types(mut self, event_types: Vec<EventTypeToken>) -> Self {
        self.event_types = Some(event_types);
        self
    }

    pub fn with_storage_account_name<T: Into<String>>(mut self, name: T) -> Self {
        self.storage_account_name = Some(name.into());
        self
    }

    pub fn with_storage_key_kind(mut self, kind: StorageKeyKind) -> Self {
        self.storage_key_kind = Some(kind);
        self
    }

    pub fn with_pass_thru(mut self, pass_thru: bool) -> Self {
        self.pass_thru = pass_thru;
        self
    }

    /// Apply this input to `policy`, returning the updated model.
    ///
    /// Event types are resolved before anything is copied, so on error the
    /// caller's model is untouched. The storage account name is copied as
    /// given. The result always has auditing enabled and the server default
    /// disabled.
    pub fn apply(
        &self,
        policy: &DatabaseAuditingPolicy,
    ) -> Result<DatabaseAuditingPolicy, AuditPolicyError> {
        let event_types = resolve_event_types(self.event_types.as_deref())?
            .map(|resolved| to_audit_event_types(&resolved))
            .transpose()?;

        let mut updated = policy.clone();
        updated.audit_state = AuditState::Enabled;
        updated.use_server_default = UseServerDefault::Disabled;

        if let Some(name) = &self.storage_account_name {
            updated.storage_account_name = Some(name.clone());
        }
        if let Some(kind) = self.storage_key_kind {
            updated.storage_key_kind = kind;
        }
        if let Some(event_types) = event_types {
            updated.event_types = event_types;
        }

        debug!(
            event = "AuditPolicy",
            phase = "Apply",
            before = policy.to_string(),
            after = updated.to_string()
        );

        Ok(updated)
    }

    /// Fetch the target's policy from `store`, apply this input and persist
    /// the result. Returns the updated model when `pass_thru` is set.
    pub fn execute<S: AuditPolicyStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Option<DatabaseAuditingPolicy>, AuditPolicyError> {
        let current = store.fetch(&self.target)?;
        let updated = self.apply(&current)?;
        store.persist(&updated)?;
        Ok(self.pass_thru.then_some(updated))
    }
}
