//! Shared types, constants, configuration, and errors for vizytka.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
