//! Core vCard value types.

mod structured;

pub use structured::StructuredName;
