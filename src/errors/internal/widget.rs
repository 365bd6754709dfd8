use thiserror::Error;

/// Business-rule failures raised by the widget service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("A Widget with the name '{name}' already exists.")]
    AlreadyExists { name: String },

    #[error("Widget with name '{name}' not found.")]
    NotFound { name: String },
}
