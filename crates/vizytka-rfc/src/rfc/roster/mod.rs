//! Phone roster input format.
//!
//! A roster is a plain text file with one candidate contact per line: a
//! phone number followed by a free-form name, an optional nickname, and
//! an optional `~TG <phone> | <id>~` messaging annotation.
//!
//! ## Usage
//!
//! ```rust
//! use vizytka_rfc::rfc::roster::parse_line;
//!
//! let record = parse_line("380991234567 Марія Коваль m_kov").unwrap();
//! assert_eq!(record.phone, "380991234567");
//! assert_eq!(record.name, "Марія Коваль");
//! assert_eq!(record.nickname, "m_kov");
//! ```
//!
//! Lines that do not start with an 11–12 digit phone run are not
//! contacts and are silently skipped; parsing never fails.

mod parse;

pub use parse::{parse_line, parse_roster};
