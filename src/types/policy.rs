//! The database auditing policy model.

use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumString};
use utoipa::ToSchema;

use super::event_type::AuditEventType;
use super::storage::StorageKeyKind;
use super::target::DatabaseTarget;

/// Whether auditing is active. `New` marks a database that has never had
/// a policy applied.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    StrumDisplay,
    EnumString,
)]
pub enum AuditState {
    Enabled,
    Disabled,
    New,
}

/// Whether the database inherits its server's auditing policy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    StrumDisplay,
    EnumString,
)]
pub enum UseServerDefault {
    Enabled,
    Disabled,
}

/// Auditing configuration of a single database.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct DatabaseAuditingPolicy {
    pub target: DatabaseTarget,
    pub audit_state: AuditState,
    pub use_server_default: UseServerDefault,
    pub storage_account_name: Option<String>,
    pub storage_key_kind: StorageKeyKind,
    pub event_types: Vec<AuditEventType>,
}

impl DatabaseAuditingPolicy {
    /// The policy of a database that has never been configured.
    pub fn unconfigured(target: DatabaseTarget) -> Self {
        DatabaseAuditingPolicy {
            target,
            audit_state: AuditState::New,
            use_server_default: UseServerDefault::Disabled,
            storage_account_name: None,
            storage_key_kind: StorageKeyKind::Primary,
            event_types: Vec::new(),
        }
    }
}

impl Display for DatabaseAuditingPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} [{}] storage={}:{} events=[{}]",
            self.target,
            self.audit_state,
            self.storage_account_name.as_deref().unwrap_or("-"),
            self.storage_key_kind,
            self.event_types.iter().join(",")
        )
    }
}
