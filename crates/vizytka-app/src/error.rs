use thiserror::Error;

/// Application-level errors (CLI shell)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CoreError(#[from] vizytka_core::error::CoreError),

    #[error(transparent)]
    RfcError(#[from] vizytka_rfc::error::RfcError),

    #[error("Session store error: {0}")]
    StoreError(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
