use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    /// The addressed profile does not exist.
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// The submitted payload failed validation. The message is user-facing.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
