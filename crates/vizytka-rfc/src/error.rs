use thiserror::Error;

/// Format-level errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Nothing to export")]
    EmptyExport,

    #[error(transparent)]
    CoreError(#[from] vizytka_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
