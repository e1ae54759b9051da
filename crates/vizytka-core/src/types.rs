//! Contact record types shared between the parser, the encoder, and the
//! session store.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};
use crate::error::{CoreError, CoreResult};

/// Secondary phone/identifier pair extracted from a `~TG ...~` annotation.
///
/// Both fields are non-empty whenever the link exists; a malformed
/// annotation is dropped as a whole, never partially kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingLink {
    /// Phone number of the linked messaging account.
    pub linked_phone: String,
    /// Numeric identifier of the linked account.
    pub linked_id: String,
}

/// One contact parsed from a roster line.
///
/// Records are immutable once parsed. The session list holds them in
/// insertion order and is only ever replaced or cleared, never mutated
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// 11–12 digit phone number, no leading `+`.
    pub phone: String,
    /// Display name; never empty (placeholder-substituted).
    pub name: String,
    /// Short identifier, empty when the line carried none.
    #[serde(default)]
    pub nickname: String,
    /// Optional messaging annotation.
    #[serde(default)]
    pub messaging_link: Option<MessagingLink>,
}

impl ContactRecord {
    /// Checks the record invariants.
    ///
    /// Records produced by the parser always satisfy these; the check
    /// guards against a hand-edited or corrupted session cache.
    ///
    /// ## Errors
    /// Returns an error if the phone is not an 11–12 digit run, the name
    /// is empty, or a messaging link has an empty component.
    pub fn check_invariants(&self) -> CoreResult<()> {
        if self.phone.len() < MIN_PHONE_DIGITS
            || self.phone.len() > MAX_PHONE_DIGITS
            || !self.phone.chars().all(|c| c.is_ascii_digit())
        {
            return Err(CoreError::InvariantViolation(
                "phone must be an 11-12 digit run",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CoreError::InvariantViolation("name must not be empty"));
        }
        if let Some(link) = &self.messaging_link
            && (link.linked_phone.is_empty() || link.linked_id.is_empty())
        {
            return Err(CoreError::InvariantViolation(
                "messaging link components must not be empty",
            ));
        }
        Ok(())
    }
}
