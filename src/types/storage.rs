//! Storage target settings: which account receives audit logs and which
//! of its access keys is used.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};
use utoipa::ToSchema;

use crate::error::AuditPolicyError;

/// Which of the storage account's two access keys the policy uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ToSchema,
    AsRefStr,
    Display,
)]
pub enum StorageKeyKind {
    #[default]
    Primary,
    Secondary,
}

/// Parsing is ASCII case-insensitive and ignores surrounding whitespace.
impl FromStr for StorageKeyKind {
    type Err = AuditPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(Self::Primary.as_ref()) {
            Ok(Self::Primary)
        } else if trimmed.eq_ignore_ascii_case(Self::Secondary.as_ref()) {
            Ok(Self::Secondary)
        } else {
            Err(AuditPolicyError::InvalidStorageKeyKind(s.to_string()))
        }
    }
}

static STORAGE_ACCOUNT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]{3,24}$").expect("storage account pattern is valid"));

/// Check a storage account name against the cloud naming rule: 3 to 24
/// lowercase letters or digits.
///
/// Opt-in for callers that want to reject bad names early;
/// `SetDatabaseAuditPolicy::apply` copies names as given and leaves naming
/// rules to the service behind the store.
pub fn validate_storage_account_name(name: &str) -> Result<(), AuditPolicyError> {
    if STORAGE_ACCOUNT_NAME.is_match(name) {
        Ok(())
    } else {
        Err(AuditPolicyError::InvalidStorageAccountName(format!(
            "'{name}' must be 3-24 characters of lowercase letters and digits"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        primary = { "Primary", StorageKeyKind::Primary },
        secondary = { "Secondary", StorageKeyKind::Secondary },
        lower = { "secondary", StorageKeyKind::Secondary },
        padded = { " primary ", StorageKeyKind::Primary },
    )]
    fn test_storage_key_kind_parse(input: &str, expected: StorageKeyKind) {
        assert_eq!(StorageKeyKind::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_storage_key_kind_rejects_unknown() {
        assert_eq!(
            StorageKeyKind::from_str("Tertiary"),
            Err(AuditPolicyError::InvalidStorageKeyKind("Tertiary".to_string()))
        );
    }

    #[test]
    fn test_storage_key_kind_default_is_primary() {
        assert_eq!(StorageKeyKind::default(), StorageKeyKind::Primary);
        assert_eq!(StorageKeyKind::Secondary.to_string(), "Secondary");
    }

    #[parameterized(
        short = { "abc" },
        typical = { "auditlogs01" },
        longest = { "abcdefghijklmnopqrstuvwx" },
    )]
    fn test_valid_storage_account_names(name: &str) {
        assert!(validate_storage_account_name(name).is_ok());
    }

    #[parameterized(
        too_short = { "ab" },
        too_long = { "abcdefghijklmnopqrstuvwxy" },
        upper_case = { "AuditLogs" },
        dash = { "audit-logs" },
        empty = { "" },
    )]
    fn test_invalid_storage_account_names(name: &str) {
        assert!(matches!(
            validate_storage_account_name(name),
            Err(AuditPolicyError::InvalidStorageAccountName(_))
        ));
    }
}
