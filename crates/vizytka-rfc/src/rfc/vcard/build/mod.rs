//! vCard 2.1 serialization.
//!
//! - Encode: quoted-printable escaping of arbitrary text
//! - Fold: soft line breaks at 75 characters
//! - Card assembly: `BEGIN`/`END` wrapped N, FN, and TEL lines

mod encode;
mod fold;

pub use encode::{encode_safe, escape_bytes};
pub use fold::fold_encoded;

use vizytka_core::constants::{PLACEHOLDER_NAME, UA_COUNTRY_PREFIX};
use vizytka_core::types::ContactRecord;

use super::core::StructuredName;
use crate::error::{RfcError, RfcResult};

/// Transport line break of the card format.
pub const CRLF: &str = "\r\n";

const BEGIN_LINE: &str = "BEGIN:VCARD";
const VERSION_LINE: &str = "VERSION:2.1";
const END_LINE: &str = "END:VCARD";
const TEL_PREFIX: &str = "TEL:";

const QP_PARAMS: &str = "CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE";
const N_PREFIX: &str = const_str::concat!("N;", QP_PARAMS, ":");
const FN_PREFIX: &str = const_str::concat!("FN;", QP_PARAMS, ":");

/// Builds one complete card for a name/phone pair.
///
/// Output is deterministic: the same inputs produce byte-identical
/// cards on every call.
#[must_use]
pub fn build_card(name: &str, phone: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { PLACEHOLDER_NAME } else { name };

    let n_value = StructuredName::from_display_name(name).to_field_value();

    [
        BEGIN_LINE.to_string(),
        VERSION_LINE.to_string(),
        format!("{N_PREFIX}{}", encode_safe(&n_value)),
        format!("{FN_PREFIX}{}", encode_safe(name)),
        format!("{TEL_PREFIX}{}", normalize_phone(phone)),
        END_LINE.to_string(),
    ]
    .join(CRLF)
}

/// Prepends `+` to numbers carrying the Ukrainian country prefix.
/// Everything else is emitted unmodified.
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    if !phone.starts_with('+') && phone.starts_with(UA_COUNTRY_PREFIX) {
        format!("+{phone}")
    } else {
        phone.to_string()
    }
}

/// Builds the export fragment for one record.
///
/// A record with a messaging link yields a second card that reuses the
/// record's display name with the linked phone. Consuming contact
/// managers are assumed to merge entries with matching names, so the
/// linked number surfaces as an alternate channel of the same contact.
#[must_use]
pub fn build_contact_export(record: &ContactRecord) -> String {
    let mut cards = vec![build_card(&record.name, &record.phone)];

    if let Some(link) = &record.messaging_link {
        cards.push(build_card(&record.name, &link.linked_phone));
    }

    cards.join(CRLF)
}

/// Builds the full export payload for an ordered record list.
///
/// ## Errors
/// Returns [`RfcError::EmptyExport`] when there are no records; callers
/// surface this to the user instead of producing an empty file.
pub fn build_export(records: &[ContactRecord]) -> RfcResult<String> {
    if records.is_empty() {
        return Err(RfcError::EmptyExport);
    }

    tracing::debug!(count = records.len(), "Building card export");

    Ok(records
        .iter()
        .map(build_contact_export)
        .collect::<Vec<_>>()
        .join(CRLF))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ukrainian_phone_gains_plus() {
        assert_eq!(normalize_phone("380931112233"), "+380931112233");
    }

    #[test]
    fn foreign_phone_is_unchanged() {
        assert_eq!(normalize_phone("11234567890"), "11234567890");
    }

    #[test]
    fn already_prefixed_phone_is_unchanged() {
        assert_eq!(normalize_phone("+380931112233"), "+380931112233");
    }

    #[test]
    fn card_line_order_is_fixed() {
        let card = build_card("Jane Doe", "11234567890");
        let lines: Vec<&str> = card.split(CRLF).collect();
        assert_eq!(lines[0], "BEGIN:VCARD");
        assert_eq!(lines[1], "VERSION:2.1");
        assert!(lines[2].starts_with("N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:"));
        assert!(lines[3].starts_with("FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:"));
        assert_eq!(lines[4], "TEL:11234567890");
        assert_eq!(lines[5], "END:VCARD");
    }

    #[test]
    fn ascii_name_stays_readable() {
        let card = build_card("Jane Doe", "11234567890");
        assert!(card.contains("N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:Jane;Doe;;;"));
        assert!(card.contains("FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:Jane=20Doe"));
    }

    #[test]
    fn empty_name_becomes_placeholder() {
        let card = build_card("  ", "380931112233");
        assert!(card.contains("FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:no=20name"));
    }

    #[test]
    fn build_card_is_deterministic() {
        let a = build_card("Марія Коваль", "380931112233");
        let b = build_card("Марія Коваль", "380931112233");
        assert_eq!(a, b);
    }
}
