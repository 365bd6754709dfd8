use std::fmt;
use std::ops::RangeInclusive;

use crate::types::dto::widget::{CreateWidgetRequest, UpdateWidgetRequest};
use crate::types::internal::{Widget, WidgetPatch};

pub const NAME_LENGTH: RangeInclusive<usize> = 3..=100;
pub const DESCRIPTION_LENGTH: RangeInclusive<usize> = 5..=1000;
pub const MIN_PRICE: f64 = 1.00;
pub const MAX_PRICE: f64 = 20000.00;

/// Widget field a validation message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetField {
    Name,
    Description,
    Price,
}

impl WidgetField {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetField::Name => "name",
            WidgetField::Description => "description",
            WidgetField::Price => "price",
        }
    }
}

impl fmt::Display for WidgetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field constraint violation
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: WidgetField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: WidgetField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every field violation found in one request body
#[derive(Debug, Clone, Default, PartialEq, thiserror::Error)]
#[error("validation failed for {} field(s)", .fields.len())]
pub struct ValidationErrors {
    fields: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, error: FieldError) {
        self.fields.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<FieldError> {
        self.fields
    }

    /// Message recorded for `field`, if any
    pub fn message_for(&self, field: WidgetField) -> Option<&str> {
        self.fields
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

/// Validator for widget request bodies
///
/// Enforces the field constraints before a request reaches the service:
/// - name: required, 3-100 characters
/// - description: required, 5-1000 characters
/// - price: required, 1.00-20000.00 inclusive
///
/// All failing fields are collected rather than stopping at the first one.
/// Blank strings count as missing and lengths are measured in characters.
pub struct WidgetValidator;

impl WidgetValidator {
    /// Validate a create request and build the widget it describes
    ///
    /// # Arguments
    /// * `request` - Create request body as received over HTTP
    ///
    /// # Returns
    /// * `Ok(Widget)` - All fields present and within their bounds
    /// * `Err(ValidationErrors)` - One entry per rejected field, in field order
    pub fn validate_new(request: &CreateWidgetRequest) -> Result<Widget, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = Self::required_text(
            &mut errors,
            WidgetField::Name,
            request.name.as_deref(),
            NAME_LENGTH,
            "Name",
        );
        let description = Self::required_text(
            &mut errors,
            WidgetField::Description,
            request.description.as_deref(),
            DESCRIPTION_LENGTH,
            "Description",
        );
        let price = match request.price {
            Some(price) => Self::check_price(&mut errors, price),
            None => {
                errors.push(FieldError::new(WidgetField::Price, "Price is required."));
                None
            }
        };

        match (name, description, price) {
            (Some(name), Some(description), Some(price)) if errors.is_empty() => {
                Ok(Widget::new(name, description, price))
            }
            _ => Err(errors),
        }
    }

    /// Validate an update request and build the patch it describes
    ///
    /// `description` and `price` are optional; present values must satisfy the
    /// same constraints as on create. Any `name` in the body is ignored.
    pub fn validate_patch(request: &UpdateWidgetRequest) -> Result<WidgetPatch, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let mut patch = WidgetPatch::default();

        if let Some(description) = request.description.as_deref() {
            patch.description = Self::required_text(
                &mut errors,
                WidgetField::Description,
                Some(description),
                DESCRIPTION_LENGTH,
                "Description",
            );
        }
        if let Some(price) = request.price {
            patch.price = Self::check_price(&mut errors, price);
        }

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }

    fn required_text(
        errors: &mut ValidationErrors,
        field: WidgetField,
        value: Option<&str>,
        length: RangeInclusive<usize>,
        label: &str,
    ) -> Option<String> {
        let value = match value {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                errors.push(FieldError::new(field, format!("{} is required.", label)));
                return None;
            }
        };

        if !length.contains(&value.chars().count()) {
            errors.push(FieldError::new(
                field,
                format!(
                    "{} must be between {} and {} characters.",
                    label,
                    length.start(),
                    length.end()
                ),
            ));
            return None;
        }

        Some(value.to_string())
    }

    fn check_price(errors: &mut ValidationErrors, price: f64) -> Option<f64> {
        if price.is_nan() || price < MIN_PRICE {
            errors.push(FieldError::new(WidgetField::Price, "Price must be at least 1."));
            return None;
        }
        if price > MAX_PRICE {
            errors.push(FieldError::new(WidgetField::Price, "Price must not exceed 20000."));
            return None;
        }
        Some(price)
    }
}
