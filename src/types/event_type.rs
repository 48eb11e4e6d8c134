//! Event-type tokens accepted at the input boundary and the audit event
//! enumerants they map onto.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::error::AuditPolicyError;

/// A requested event type, either one of the fifteen canonical categories
/// or one of the shorthands `All` and `None`.
///
/// Parsing is ASCII case-insensitive; display and serialization use the
/// canonical spelling (e.g. `PlainSQL_Success`).
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
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum EventTypeToken {
    DataAccess,
    DataChanges,
    SecurityExceptions,
    RevokePermissions,
    SchemaChanges,
    #[serde(rename = "PlainSQL_Success")]
    #[strum(serialize = "PlainSQL_Success")]
    PlainSqlSuccess,
    #[serde(rename = "PlainSQL_Failure")]
    #[strum(serialize = "PlainSQL_Failure")]
    PlainSqlFailure,
    #[serde(rename = "ParameterizedSQL_Success")]
    #[strum(serialize = "ParameterizedSQL_Success")]
    ParameterizedSqlSuccess,
    #[serde(rename = "ParameterizedSQL_Failure")]
    #[strum(serialize = "ParameterizedSQL_Failure")]
    ParameterizedSqlFailure,
    #[serde(rename = "StoredProcedure_Success")]
    #[strum(serialize = "StoredProcedure_Success")]
    StoredProcedureSuccess,
    #[serde(rename = "StoredProcedure_Failure")]
    #[strum(serialize = "StoredProcedure_Failure")]
    StoredProcedureFailure,
    #[serde(rename = "Login_Success")]
    #[strum(serialize = "Login_Success")]
    LoginSuccess,
    #[serde(rename = "Login_Failure")]
    #[strum(serialize = "Login_Failure")]
    LoginFailure,
    #[serde(rename = "TransactionManagement_Success")]
    #[strum(serialize = "TransactionManagement_Success")]
    TransactionManagementSuccess,
    #[serde(rename = "TransactionManagement_Failure")]
    #[strum(serialize = "TransactionManagement_Failure")]
    TransactionManagementFailure,
    /// Shorthand for every canonical event type.
    All,
    /// Shorthand for no event types at all.
    None,
}

/// Every canonical event type, in the order `All` expands to.
pub const ALL_EVENT_TYPES: [EventTypeToken; 15] = [
    EventTypeToken::DataAccess,
    EventTypeToken::DataChanges,
    EventTypeToken::SecurityExceptions,
    EventTypeToken::RevokePermissions,
    EventTypeToken::SchemaChanges,
    EventTypeToken::PlainSqlSuccess,
    EventTypeToken::PlainSqlFailure,
    EventTypeToken::ParameterizedSqlSuccess,
    EventTypeToken::ParameterizedSqlFailure,
    EventTypeToken::StoredProcedureSuccess,
    EventTypeToken::StoredProcedureFailure,
    EventTypeToken::LoginSuccess,
    EventTypeToken::LoginFailure,
    EventTypeToken::TransactionManagementSuccess,
    EventTypeToken::TransactionManagementFailure,
];

impl EventTypeToken {
    /// `true` for `All` and `None`.
    pub fn is_shorthand(&self) -> bool {
        matches!(self, Self::All | Self::None)
    }
}

/// Parse a list of user-supplied strings into tokens.
///
/// The first string outside the vocabulary aborts parsing with
/// `AuditPolicyError::InvalidEventType`.
pub fn parse_event_types<I, S>(input: I) -> Result<Vec<EventTypeToken>, AuditPolicyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    input
        .into_iter()
        .map(|s| {
            let s = s.as_ref();
            s.trim()
                .parse::<EventTypeToken>()
                .map_err(|_| AuditPolicyError::InvalidEventType(s.to_string()))
        })
        .collect()
}

/// The audit event category stored on a policy model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Display, EnumIter,
)]
pub enum AuditEventType {
    DataAccess,
    DataChanges,
    SecurityExceptions,
    RevokePermissions,
    SchemaChanges,
    PlainSqlSuccess,
    PlainSqlFailure,
    ParameterizedSqlSuccess,
    ParameterizedSqlFailure,
    StoredProcedureSuccess,
    StoredProcedureFailure,
    LoginSuccess,
    LoginFailure,
    TransactionManagementSuccess,
    TransactionManagementFailure,
}

impl TryFrom<EventTypeToken> for AuditEventType {
    type Error = AuditPolicyError;

    fn try_from(token: EventTypeToken) -> Result<Self, Self::Error> {
        let mapped = match token {
            EventTypeToken::DataAccess => Self::DataAccess,
            EventTypeToken::DataChanges => Self::DataChanges,
            EventTypeToken::SecurityExceptions => Self::SecurityExceptions,
            EventTypeToken::RevokePermissions => Self::RevokePermissions,
            EventTypeToken::SchemaChanges => Self::SchemaChanges,
            EventTypeToken::PlainSqlSuccess => Self::PlainSqlSuccess,
            EventTypeToken::PlainSqlFailure => Self::PlainSqlFailure,
            EventTypeToken::ParameterizedSqlSuccess => Self::ParameterizedSqlSuccess,
            EventTypeToken::ParameterizedSqlFailure => Self::ParameterizedSqlFailure,
            EventTypeToken::StoredProcedureSuccess => Self::StoredProcedureSuccess,
            EventTypeToken::StoredProcedureFailure => Self::StoredProcedureFailure,
            EventTypeToken::LoginSuccess => Self::LoginSuccess,
            EventTypeToken::LoginFailure => Self::LoginFailure,
            EventTypeToken::TransactionManagementSuccess => Self::TransactionManagementSuccess,
            EventTypeToken::TransactionManagementFailure => Self::TransactionManagementFailure,
            EventTypeToken::All | EventTypeToken::None => {
                return Err(AuditPolicyError::NotCanonical(token));
            }
        };
        Ok(mapped)
    }
}

/// Map a resolved token sequence onto audit event types, keeping order
/// and duplicates.
pub fn to_audit_event_types(
    resolved: &[EventTypeToken],
) -> Result<Vec<AuditEventType>, AuditPolicyError> {
    resolved
        .iter()
        .map(|token| AuditEventType::try_from(*token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use yare::parameterized;

    #[parameterized(
        data_access = { "DataAccess", EventTypeToken::DataAccess },
        schema_changes = { "SchemaChanges", EventTypeToken::SchemaChanges },
        plain_sql_success = { "PlainSQL_Success", EventTypeToken::PlainSqlSuccess },
        parameterized_failure = { "ParameterizedSQL_Failure", EventTypeToken::ParameterizedSqlFailure },
        login_failure = { "Login_Failure", EventTypeToken::LoginFailure },
        lower_case = { "datachanges", EventTypeToken::DataChanges },
        upper_case = { "TRANSACTIONMANAGEMENT_SUCCESS", EventTypeToken::TransactionManagementSuccess },
        all = { "All", EventTypeToken::All },
        none_lower = { "none", EventTypeToken::None },
    )]
    fn test_token_from_str(input: &str, expected: EventTypeToken) {
        assert_eq!(EventTypeToken::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_token_display_uses_canonical_spelling() {
        assert_eq!(EventTypeToken::PlainSqlSuccess.to_string(), "PlainSQL_Success");
        assert_eq!(
            EventTypeToken::StoredProcedureFailure.as_ref(),
            "StoredProcedure_Failure"
        );
        assert_eq!(EventTypeToken::All.to_string(), "All");
    }

    #[test]
    fn test_display_parses_back_for_every_token() {
        for token in EventTypeToken::iter() {
            assert_eq!(EventTypeToken::from_str(&token.to_string()).unwrap(), token);
        }
    }

    #[test]
    fn test_serde_spelling_matches_display() {
        for token in EventTypeToken::iter() {
            let value = serde_json::to_value(token).unwrap();
            assert_eq!(value, serde_json::Value::String(token.to_string()));
        }
    }

    #[test]
    fn test_parse_event_types_rejects_unknown() {
        let err = parse_event_types(["DataAccess", "Everything"]).unwrap_err();
        assert_eq!(err, AuditPolicyError::InvalidEventType("Everything".to_string()));
    }

    #[test]
    fn test_parse_event_types_trims_whitespace() {
        let tokens = parse_event_types([" Login_Success ", "SchemaChanges"]).unwrap();
        assert_eq!(
            tokens,
            vec![EventTypeToken::LoginSuccess, EventTypeToken::SchemaChanges]
        );
    }

    #[test]
    fn test_all_event_types_is_every_canonical_token_once() {
        let unique: HashSet<_> = ALL_EVENT_TYPES.iter().collect();
        assert_eq!(unique.len(), ALL_EVENT_TYPES.len());
        assert!(ALL_EVENT_TYPES.iter().all(|t| !t.is_shorthand()));
        let canonical: Vec<_> = EventTypeToken::iter().filter(|t| !t.is_shorthand()).collect();
        assert_eq!(canonical, ALL_EVENT_TYPES.to_vec());
    }

    #[test]
    fn test_mapping_is_exhaustive_and_one_to_one() {
        let mapped = to_audit_event_types(&ALL_EVENT_TYPES).unwrap();
        let expected: Vec<_> = AuditEventType::iter().collect();
        assert_eq!(mapped, expected);
    }

    #[parameterized(
        all = { EventTypeToken::All },
        none = { EventTypeToken::None },
    )]
    fn test_shorthand_has_no_mapping(token: EventTypeToken) {
        assert_eq!(
            AuditEventType::try_from(token),
            Err(AuditPolicyError::NotCanonical(token))
        );
    }

    #[test]
    fn test_mapping_keeps_duplicates() {
        let mapped = to_audit_event_types(&[
            EventTypeToken::LoginFailure,
            EventTypeToken::LoginFailure,
        ])
        .unwrap();
        assert_eq!(
            mapped,
            vec![AuditEventType::LoginFailure, AuditEventType::LoginFailure]
        );
    }
}
