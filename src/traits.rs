use crate::error::AuditPolicyError;
use crate::types::{DatabaseAuditingPolicy, DatabaseTarget};

/// Anything that can load and save database auditing policies, e.g. a
/// control-plane client or the in-memory store.
pub trait AuditPolicyStore {
    /// Fetch the current policy of `target`. A database that has never been
    /// configured yields its unconfigured policy rather than an error.
    fn fetch(&self, target: &DatabaseTarget) -> Result<DatabaseAuditingPolicy, AuditPolicyError>;

    /// Save `policy`, replacing whatever was stored for its target.
    fn persist(&self, policy: &DatabaseAuditingPolicy) -> Result<(), AuditPolicyError>;
}
