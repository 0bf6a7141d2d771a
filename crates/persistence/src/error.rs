//! Store error type.

use thiserror::Error;

/// Errors returned by any [`crate::store::Store`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("Duplicate value: {0}")]
    Conflict(String),

    /// A foreign key pointed at a record that does not exist.
    #[error("Referenced record not found: {0}")]
    MissingReference(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                Some("23505") => {
                    return StoreError::Conflict(
                        db_err.constraint().unwrap_or("unique").to_string(),
                    )
                }
                Some("23503") => {
                    return StoreError::MissingReference(
                        db_err.constraint().unwrap_or("foreign_key").to_string(),
                    )
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}
