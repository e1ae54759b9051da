//! Export-level tests: whole-payload shape for parsed records.

use vizytka_core::types::{ContactRecord, MessagingLink};

use super::build::{CRLF, build_card, build_contact_export, build_export};
use crate::error::RfcError;
use crate::rfc::roster::parse_line;

fn linked_record() -> ContactRecord {
    ContactRecord {
        phone: "380991234567".to_string(),
        name: "Марія".to_string(),
        nickname: String::new(),
        messaging_link: Some(MessagingLink {
            linked_phone: "380501112233".to_string(),
            linked_id: "555666".to_string(),
        }),
    }
}

#[test_log::test]
fn linked_record_exports_two_cards() {
    let export = build_contact_export(&linked_record());
    assert_eq!(export.matches("BEGIN:VCARD").count(), 2);
    assert_eq!(export.matches("END:VCARD").count(), 2);
}

#[test_log::test]
fn linked_cards_share_the_display_name() {
    let export = build_contact_export(&linked_record());

    let fn_lines: Vec<&str> = export
        .split(CRLF)
        .filter(|line| line.starts_with("FN;"))
        .collect();
    assert_eq!(fn_lines.len(), 2);
    assert_eq!(fn_lines[0], fn_lines[1]);

    let tel_lines: Vec<&str> = export
        .split(CRLF)
        .filter(|line| line.starts_with("TEL:"))
        .collect();
    assert_eq!(tel_lines, vec!["TEL:+380991234567", "TEL:+380501112233"]);
}

#[test_log::test]
fn plain_record_exports_one_card() {
    let mut record = linked_record();
    record.messaging_link = None;
    let export = build_contact_export(&record);
    assert_eq!(export.matches("BEGIN:VCARD").count(), 1);
}

#[test_log::test]
fn empty_export_is_rejected() {
    assert!(matches!(build_export(&[]), Err(RfcError::EmptyExport)));
}

#[test_log::test]
fn export_preserves_record_order() {
    let mut first = linked_record();
    first.messaging_link = None;
    first.name = "Перший".to_string();
    let mut second = first.clone();
    second.name = "Другий".to_string();
    second.phone = "380501112233".to_string();

    let export = build_export(&[first, second]).unwrap();
    let first_pos = export.find("TEL:+380991234567").unwrap();
    let second_pos = export.find("TEL:+380501112233").unwrap();
    assert!(first_pos < second_pos);
}

#[test_log::test]
fn parse_then_export_round_trip() {
    let record = parse_line("380991234567 Марія ~TG 380501112233 | 555666~").unwrap();
    let export = build_export(&[record]).unwrap();

    assert_eq!(export.matches("BEGIN:VCARD").count(), 2);
    // 'М' = D0 9C, 'а' = D0 B0, 'р' = D1 80, 'і' = D1 96, 'я' = D1 8F
    assert!(export.contains("FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:=D0=9C=D0=B0=D1=80=D1=96=D1=8F"));
}

#[test_log::test]
fn long_name_value_folds_with_soft_breaks() {
    let name = "Дуже Довге Імʼя ".repeat(5).trim().to_string();
    let card = build_card(&name, "380991234567");
    assert!(card.contains("=\r\n"));

    // Continuation segments of a folded value stay within the limit;
    // only lines opening a property carry the prefix overhead.
    let property_starts = ["BEGIN:", "VERSION:", "N;", "FN;", "TEL:", "END:"];
    for line in card.split(CRLF) {
        if !property_starts.iter().any(|p| line.starts_with(p)) {
            assert!(line.len() <= 75, "continuation too long: {line}");
        }
    }
}
