use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::error::AuditPolicyError;
use crate::traits::AuditPolicyStore;
use crate::types::{DatabaseAuditingPolicy, DatabaseTarget};

/// In-memory policy store. Cloneable and thread-safe; clones share state.
#[derive(Clone, Default)]
pub struct InMemoryPolicyStore {
    inner: Arc<RwLock<HashMap<DatabaseTarget, DatabaseAuditingPolicy>>>,
}

impl InMemoryPolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of databases with a stored policy.
    pub fn len(&self) -> Result<usize, AuditPolicyError> {
        Ok(self.inner.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AuditPolicyError> {
        Ok(self.len()? == 0)
    }
}

impl AuditPolicyStore for InMemoryPolicyStore {
    fn fetch(&self, target: &DatabaseTarget) -> Result<DatabaseAuditingPolicy, AuditPolicyError> {
        let guard = self.inner.read()?;
        let policy = match guard.get(target) {
            Some(policy) => policy.clone(),
            None => {
                debug!(
                    event = "Store",
                    phase = "Fetch",
                    target = target.to_string(),
                    result = "unconfigured"
                );
                DatabaseAuditingPolicy::unconfigured(target.clone())
            }
        };
        Ok(policy)
    }

    fn persist(&self, policy: &DatabaseAuditingPolicy) -> Result<(), AuditPolicyError> {
        self.inner
            .write()?
            .insert(policy.target.clone(), policy.clone());
        info!(event = "Store", phase = "Persist", policy = policy.to_string());
        Ok(())
    }
}
