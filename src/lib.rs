// src/lib.rs
pub use command::SetDatabaseAuditPolicy;
pub use error::AuditPolicyError;
pub use resolver::resolve_event_types;
pub use store::InMemoryPolicyStore;
pub use traits::AuditPolicyStore;
pub use types::{
    ALL_EVENT_TYPES, AuditEventType, AuditState, DatabaseAuditingPolicy, DatabaseTarget,
    EventTypeToken, StorageKeyKind, UseServerDefault, parse_event_types, to_audit_event_types,
    validate_storage_account_name,
};

mod command;
mod error;
mod resolver;
mod store;
mod traits;
mod types;
