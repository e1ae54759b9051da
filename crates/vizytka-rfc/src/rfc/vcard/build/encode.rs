//! Quoted-printable transfer encoding.
//!
//! Escapes arbitrary UTF-8 text into a 7-bit safe representation for
//! embedding in legacy ASCII-only card fields.

use super::fold::fold_encoded;

/// Escape character opening an `=XX` triplet.
const ESCAPE: u8 = b'=';

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Encodes text into its folded quoted-printable form.
///
/// Empty input yields empty output.
#[must_use]
pub fn encode_safe(text: &str) -> String {
    fold_encoded(&escape_bytes(text))
}

/// Escapes the UTF-8 bytes of `text` without folding.
///
/// Printable ASCII (33–126) other than `=` passes through literally.
/// Space is always escaped as `=20` so a value can never end a physical
/// line in ambiguous whitespace. Every other byte becomes `=XX` with
/// uppercase, zero-padded hex.
#[must_use]
pub fn escape_bytes(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);

    for byte in text.bytes() {
        match byte {
            b'!'..=b'~' if byte != ESCAPE => out.push(char::from(byte)),
            _ => {
                out.push('=');
                out.push(char::from(HEX_UPPER[usize::from(byte >> 4)]));
                out.push(char::from(HEX_UPPER[usize::from(byte & 0x0F)]));
            }
        }
    }

    out
}
