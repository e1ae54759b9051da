//! Format handling for vizytka: the roster line parser and the vCard 2.1
//! builder with its quoted-printable transfer encoding.

pub mod error;
pub mod rfc;
