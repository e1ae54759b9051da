//! vCard 2.1 building.
//!
//! Cards are emitted in the version-2.1 variant of the card interchange
//! format: `BEGIN:VCARD`/`END:VCARD` markers, a structured N field and
//! an FN field both tagged `CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE`,
//! and an untagged TEL field, all joined with CRLF.
//!
//! ## Usage
//!
//! ```rust
//! use vizytka_rfc::rfc::vcard::build_card;
//!
//! let card = build_card("Jane Doe", "380931112233");
//! assert!(card.starts_with("BEGIN:VCARD\r\nVERSION:2.1\r\n"));
//! assert!(card.contains("TEL:+380931112233"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - structured value types
//! - [`build`] - card assembly and the quoted-printable primitive

pub mod build;
pub mod core;

#[cfg(test)]
mod tests;

pub use build::{build_card, build_contact_export, build_export, encode_safe};
pub use core::StructuredName;
