// Services layer - Business logic and validation
pub mod widget_service;
pub mod widget_validator;

pub use widget_service::WidgetService;
pub use widget_validator::{FieldError, ValidationErrors, WidgetField, WidgetValidator};
