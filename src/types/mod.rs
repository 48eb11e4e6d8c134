//! Data model types for auditing policy requests and models.
//!
//! Canonical string forms:
//! - Event type: `DataAccess`, `PlainSQL_Success`, ... plus the shorthands `All` and `None`
//! - Storage key kind: `Primary` or `Secondary`
//! - Database target: `resource_group/server/database`
//!
//! Token parsing is ASCII case-insensitive.

mod event_type;
mod policy;
mod storage;
mod target;

pub use event_type::{
    ALL_EVENT_TYPES, AuditEventType, EventTypeToken, parse_event_types, to_audit_event_types,
};
pub use policy::{AuditState, DatabaseAuditingPolicy, UseServerDefault};
pub use storage::{StorageKeyKind, validate_storage_account_name};
pub use target::DatabaseTarget;
