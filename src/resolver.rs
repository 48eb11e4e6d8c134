//! Expansion of the `All` / `None` shorthands in a requested event-type list.

use itertools::Itertools;
use tracing::{debug, warn};

use crate::error::AuditPolicyError;
use crate::types::{ALL_EVENT_TYPES, EventTypeToken};

/// Resolve a requested event-type list into canonical tokens.
///
/// Returns `Ok(None)` when nothing was requested, meaning the policy's
/// event types are left as they are. This is distinct from
/// `Ok(Some(vec![]))`, which is what `[None]` resolves to.
///
/// Shorthands are only valid as the sole element. A longer list holding
/// `All` fails with `InvalidEventTypeSet(All)`, otherwise one holding
/// `None` fails with `InvalidEventTypeSet(None)`. Any other list is
/// returned as given, order and duplicates included.
///
/// Example:
/// ```rust
/// use sqlaudit_core::{EventTypeToken, resolve_event_types};
///
/// let resolved = resolve_event_types(Some(&[EventTypeToken::All])).unwrap().unwrap();
/// assert_eq!(resolved.len(), 15);
/// assert!(resolve_event_types(Some(&[])).unwrap().is_none());
/// ```
pub fn resolve_event_types(
    requested: Option<&[EventTypeToken]>,
) -> Result<Option<Vec<EventTypeToken>>, AuditPolicyError> {
    let requested = match requested {
        Some(tokens) if !tokens.is_empty() => tokens,
        _ => {
            debug!(event = "EventTypes", phase = "Resolve", result = "unchanged");
            return Ok(None);
        }
    };

    let resolved = match requested {
        [EventTypeToken::None] => Vec::new(),
        [EventTypeToken::All] => ALL_EVENT_TYPES.to_vec(),
        [single] => vec![*single],
        many => {
            for shorthand in [EventTypeToken::All, EventTypeToken::None] {
                if many.contains(&shorthand) {
                    warn!(
                        event = "EventTypes",
                        phase = "Resolve",
                        requested = many.iter().join(","),
                        shorthand = %shorthand,
                        "shorthand combined with other event types"
                    );
                    return Err(AuditPolicyError::InvalidEventTypeSet(shorthand));
                }
            }
            many.to_vec()
        }
    };

    debug!(
        event = "EventTypes",
        phase = "Resolve",
        requested = requested.iter().join(","),
        resolved = resolved.iter().join(",")
    );

    Ok(Some(resolved))
}
