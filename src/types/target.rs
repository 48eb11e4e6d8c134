//! Addressing a single database on a logical server.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AuditPolicyError;

/// A database, identified by resource group, server and database name.
///
/// Canonical string form: `resource_group/server/database`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct DatabaseTarget {
    resource_group: String,
    server_name: String,
    database_name: String,
}

impl DatabaseTarget {
    pub fn new<R, S, D>(resource_group: R, server_name: S, database_name: D) -> Self
    where
        R: Into<String>,
        S: Into<String>,
        D: Into<String>,
    {
        DatabaseTarget {
            resource_group: resource_group.into(),
            server_name: server_name.into(),
            database_name: database_name.into(),
        }
    }

    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

impl Display for DatabaseTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}/{}/{}",
            self.resource_group, self.server_name, self.database_name
        )
    }
}

impl FromStr for DatabaseTarget {
    type Err = AuditPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').map(str::trim).collect();
        match parts.as_slice() {
            [rg, server, db] if !rg.is_empty() && !server.is_empty() && !db.is_empty() => {
                Ok(DatabaseTarget::new(*rg, *server, *db))
            }
            _ => Err(AuditPolicyError::InvalidFormat(format!(
                "Failed to parse database target '{s}' (expected format: resource_group/server/database)"
            ))),
        }
    }
}
