//! Wire and file format implementations.
//!
//! - [`roster`] - the line-oriented phone roster input format
//! - [`vcard`] - vCard 2.1 output with quoted-printable encoding

pub mod roster;
pub mod vcard;
