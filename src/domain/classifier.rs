//! Lifecycle classification for subscription update events.
//!
//! Maps the renewal flag and the carrier-supplied reason text onto a
//! [`NotificationKind`]. The decision is a total function: any input
//! combination classifies, nothing errors.

use std::collections::HashMap;

use regex::Regex;

use crate::domain::notification::NotificationKind;

/// Keys under which carrier status patterns are registered.
///
/// Only [`StatusKey::SelfDeactivated`] participates in classification today;
/// the other keys exist because carrier configurations ship patterns for
/// them and a populated map must not be mistaken for a self-deactivation
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKey {
    SelfDeactivated,
    OperatorDeactivated,
    Suspended,
}

/// Classifies a subscription transition.
///
/// - `renewed == true` always yields [`NotificationKind::Activation`]; the
///   renewal flag takes precedence over any reason text.
/// - Otherwise, a reason matching the pattern registered under
///   [`StatusKey::SelfDeactivated`] yields
///   [`NotificationKind::SelfDeactivation`].
/// - Every other case (no reason, no patterns, key absent, no match)
///   yields [`NotificationKind::Disconnection`].
///
/// Patterns arrive pre-anchored from
/// [`crate::config::Config::operator_settings`], so a match always spans
/// the whole reason string.
pub fn classify(
    renewed: bool,
    reason: Option<&str>,
    patterns: &HashMap<StatusKey, Regex>,
) -> NotificationKind {
    if renewed {
        return NotificationKind::Activation;
    }

    let Some(reason) = reason else {
        return NotificationKind::Disconnection;
    };

    let Some(pattern) = patterns.get(&StatusKey::SelfDeactivated) else {
        return NotificationKind::Disconnection;
    };

    if pattern.is_match(reason) {
        NotificationKind::SelfDeactivation
    } else {
        NotificationKind::Disconnection
    }
}
