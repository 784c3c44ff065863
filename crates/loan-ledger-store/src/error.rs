//! Store errors, wrapping sqlx and decimal decoding failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{entity} {id} not found")]
    NotFound { entity: String, id: i64 },

    #[error("Invalid decimal value in {field}: {value}")]
    InvalidDecimal { field: String, value: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
