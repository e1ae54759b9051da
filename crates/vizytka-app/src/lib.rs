//! CLI shell around the roster parser and card builder.

pub mod cli;
pub mod error;
pub mod run;
pub mod store;
