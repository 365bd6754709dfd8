use thiserror::Error;

pub mod storage;
pub mod widget;

pub use storage::StorageError;
pub use widget::WidgetError;

/// Internal error type for store and service operations
///
/// Separates infrastructure errors (storage) from domain errors (widget rules).
/// Not exposed via API - endpoints must convert to WidgetApiError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Widget(#[from] WidgetError),
}

impl InternalError {
    /// Create a poisoned-lock error for the named resource
    pub fn lock_poisoned(resource: impl Into<String>) -> Self {
        InternalError::Storage(StorageError::LockPoisoned {
            resource: resource.into(),
        })
    }

    pub fn already_exists(name: impl Into<String>) -> Self {
        InternalError::Widget(WidgetError::AlreadyExists { name: name.into() })
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        InternalError::Widget(WidgetError::NotFound { name: name.into() })
    }
}
