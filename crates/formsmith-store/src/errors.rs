use thiserror::Error;

/// Errors emitted by form stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another form already uses the requested slug.
    #[error("slug already taken: {0}")]
    SlugTaken(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by stores.
pub type Result<T> = std::result::Result<T, StoreError>;
