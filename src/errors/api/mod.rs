// API-facing error types
pub mod widget;

// Re-exports for convenience
pub use widget::{FieldErrorResponse, WidgetApiError, WidgetErrorResponse};
