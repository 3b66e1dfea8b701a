/// Errors from metadata store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The requested name is in neither the role index nor the consistent
    /// index.
    #[error("{resource} trust data unavailable; has the repository been initialized?")]
    MetaNotFound { resource: String },
}

impl StoreError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        StoreError::MetaNotFound {
            resource: resource.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::MetaNotFound { .. })
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
