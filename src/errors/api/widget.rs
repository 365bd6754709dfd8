use crate::errors::internal::{InternalError, StorageError, WidgetError};
use crate::services::widget_validator::ValidationErrors;
use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

/// Standardized error response for widget endpoints
#[derive(Object, Debug, Clone)]
pub struct WidgetErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,

    /// Per-field validation messages (empty unless validation failed)
    pub fields: Vec<FieldErrorResponse>,
}

/// A single rejected field in a request body
#[derive(Object, Debug, Clone, PartialEq)]
pub struct FieldErrorResponse {
    /// Name of the offending field
    pub field: String,

    /// Why the value was rejected
    pub message: String,
}

/// Widget operation error types
#[derive(ApiResponse, Debug)]
pub enum WidgetApiError {
    /// Request body failed field validation
    #[oai(status = 400)]
    ValidationFailed(Json<WidgetErrorResponse>),

    /// Widget not found
    #[oai(status = 404)]
    NotFound(Json<WidgetErrorResponse>),

    /// Widget with the same name already exists
    #[oai(status = 409)]
    AlreadyExists(Json<WidgetErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<WidgetErrorResponse>),
}

impl WidgetApiError {
    fn response(error: &str, message: String, status_code: u16) -> Json<WidgetErrorResponse> {
        Json(WidgetErrorResponse {
            error: error.to_string(),
            message,
            status_code,
            fields: Vec::new(),
        })
    }

    /// Create a ValidationFailed error listing every rejected field
    pub fn validation_failed(errors: ValidationErrors) -> Self {
        let fields = errors
            .into_fields()
            .into_iter()
            .map(|field_error| FieldErrorResponse {
                field: field_error.field.to_string(),
                message: field_error.message,
            })
            .collect();

        WidgetApiError::ValidationFailed(Json(WidgetErrorResponse {
            error: "validation_failed".to_string(),
            message: "Request validation failed".to_string(),
            status_code: 400,
            fields,
        }))
    }

    /// Create a ValidationFailed error for a body that could not be parsed
    ///
    /// Covers malformed JSON and fields of the wrong JSON type. The parser's
    /// reason is reported against the pseudo-field `body`.
    pub fn unparseable_body(reason: &str) -> Self {
        WidgetApiError::ValidationFailed(Json(WidgetErrorResponse {
            error: "validation_failed".to_string(),
            message: "Request body could not be parsed".to_string(),
            status_code: 400,
            fields: vec![FieldErrorResponse {
                field: "body".to_string(),
                message: reason.to_string(),
            }],
        }))
    }

    /// Create a NotFound error
    pub fn not_found(name: &str) -> Self {
        WidgetApiError::NotFound(Self::response(
            "not_found",
            format!("Widget with name '{}' not found.", name),
            404,
        ))
    }

    /// Create an AlreadyExists error
    pub fn already_exists(name: &str) -> Self {
        WidgetApiError::AlreadyExists(Self::response(
            "already_exists",
            format!("A Widget with the name '{}' already exists.", name),
            409,
        ))
    }

    /// Convert InternalError to WidgetApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Infrastructure error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Widget(WidgetError::AlreadyExists { name }) => {
                tracing::warn!("Rejected duplicate widget name: {}", name);
                Self::already_exists(name)
            }
            InternalError::Widget(WidgetError::NotFound { name }) => Self::not_found(name),
            InternalError::Storage(StorageError::LockPoisoned { resource }) => {
                tracing::error!("Storage failure on {}: {}", resource, err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    pub fn internal_server_error() -> Self {
        WidgetApiError::InternalError(Self::response(
            "internal_error",
            "An internal error occurred".to_string(),
            500,
        ))
    }

    fn body(&self) -> &WidgetErrorResponse {
        match self {
            WidgetApiError::ValidationFailed(json) => &json.0,
            WidgetApiError::NotFound(json) => &json.0,
            WidgetApiError::AlreadyExists(json) => &json.0,
            WidgetApiError::InternalError(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.body().message.clone()
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        self.body().status_code
    }

    /// Get the per-field validation messages, empty for non-validation errors
    pub fn fields(&self) -> &[FieldErrorResponse] {
        &self.body().fields
    }
}

impl From<InternalError> for WidgetApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for WidgetApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
