//! Roster line scanner.

use vizytka_core::constants::{MAX_PHONE_DIGITS, MIN_PHONE_DIGITS, PLACEHOLDER_NAME};
use vizytka_core::types::{ContactRecord, MessagingLink};

/// Parses one roster line into a contact record.
///
/// Returns `None` for blank lines and for lines that do not start with
/// an 11–12 digit phone run; every other outcome is a well-formed
/// record. There is no partial or invalid record state.
#[must_use]
pub fn parse_line(line: &str) -> Option<ContactRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let digit_run = line.bytes().take_while(u8::is_ascii_digit).count();
    if digit_run < MIN_PHONE_DIGITS {
        return None;
    }

    // A longer run yields a 12-digit phone; the surplus digits stay in
    // the tail ({11,12} greedy semantics).
    let (phone, tail) = line.split_at(digit_run.min(MAX_PHONE_DIGITS));

    // Normalized before annotation matching so the `~TG~` shape only has
    // to deal with single spaces.
    let tail = normalize_tail(tail);
    let (tail, messaging_link) = extract_messaging_link(&tail);
    let (name, nickname) = split_name(&tail);

    Some(ContactRecord {
        phone: phone.to_string(),
        name,
        nickname,
        messaging_link,
    })
}

/// Parses a whole roster, skipping non-contact lines.
///
/// Never fails; input with no contact lines yields an empty list.
#[must_use]
pub fn parse_roster(input: &str) -> Vec<ContactRecord> {
    input.lines().filter_map(parse_line).collect()
}

/// Tabs become spaces, whitespace runs collapse to one space, ends trimmed.
fn normalize_tail(tail: &str) -> String {
    tail.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts a `~TG <digits> | <digits>~` annotation from the tail.
///
/// On a match the tail is truncated strictly before the opening tilde.
/// A malformed annotation is treated as entirely absent.
fn extract_messaging_link(tail: &str) -> (String, Option<MessagingLink>) {
    for (idx, _) in tail.match_indices('~') {
        if let Some(link) = parse_annotation(&tail[idx..]) {
            return (tail[..idx].trim().to_string(), Some(link));
        }
    }
    (tail.to_string(), None)
}

/// Parses an annotation starting at an opening tilde.
fn parse_annotation(s: &str) -> Option<MessagingLink> {
    let rest = s.strip_prefix('~')?.strip_prefix("TG")?;
    if !rest.starts_with(' ') {
        return None;
    }
    let (linked_phone, rest) = take_digits(rest.trim_start_matches(' '))?;
    let rest = rest.trim_start_matches(' ').strip_prefix('|')?;
    let (linked_id, rest) = take_digits(rest.trim_start_matches(' '))?;
    rest.strip_prefix('~')?;

    Some(MessagingLink {
        linked_phone: linked_phone.to_string(),
        linked_id: linked_id.to_string(),
    })
}

/// Splits off a non-empty leading digit run.
fn take_digits(s: &str) -> Option<(&str, &str)> {
    let n = s.bytes().take_while(u8::is_ascii_digit).count();
    (n > 0).then(|| s.split_at(n))
}

/// Splits the normalized tail into display name and nickname.
fn split_name(tail: &str) -> (String, String) {
    let mut tokens: Vec<&str> = tail.split_whitespace().collect();

    let nickname = if tokens.last().is_some_and(|t| is_nickname(t)) {
        tokens.pop().map(str::to_string).unwrap_or_default()
    } else {
        String::new()
    };

    let name = tokens.join(" ");
    let name = if name.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        name
    };

    (name, nickname)
}

/// Last-token nickname test: an underscore anywhere, or a token that is
/// entirely `[A-Za-z0-9_]` and not entirely Cyrillic letters. The
/// mixed-script ambiguity of this rule is deliberate and must not be
/// "improved"; downstream behavior depends on it staying reproducible.
fn is_nickname(token: &str) -> bool {
    token.contains('_')
        || (token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !token.chars().all(is_cyrillic_letter))
}

fn is_cyrillic_letter(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}')
}
