use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};

use crate::types::internal::{PaginatedResult, Widget};

/// Request body for creating a widget
///
/// Every field is optional at the wire level so that missing values are
/// reported as field-level validation errors instead of parse failures.
#[derive(Object, Debug, Clone, Default)]
pub struct CreateWidgetRequest {
    /// Unique name of the widget (3-100 characters)
    pub name: Option<String>,

    /// Description of the widget (5-1000 characters)
    pub description: Option<String>,

    /// Price of the widget (1.00-20000.00)
    pub price: Option<f64>,
}

/// Request body for updating a widget
///
/// Only `description` and `price` are applied. A `name` is accepted but
/// ignored; a widget cannot be renamed.
#[derive(Object, Debug, Clone, Default)]
pub struct UpdateWidgetRequest {
    /// Ignored; the name in the path identifies the widget
    pub name: Option<String>,

    /// New description (5-1000 characters)
    pub description: Option<String>,

    /// New price (1.00-20000.00)
    pub price: Option<f64>,
}

/// Response model representing a widget
#[derive(Object, Debug, Clone, PartialEq)]
pub struct WidgetResponse {
    /// Unique name of the widget
    pub name: String,

    /// Description of the widget
    pub description: String,

    /// Price of the widget
    pub price: f64,
}

impl From<Widget> for WidgetResponse {
    fn from(widget: Widget) -> Self {
        Self {
            name: widget.name,
            description: widget.description,
            price: widget.price,
        }
    }
}

/// One page of widgets
#[derive(Object, Debug, Clone)]
pub struct PaginatedWidgetsResponse {
    /// Widgets on the requested page
    pub items: Vec<WidgetResponse>,

    /// Total number of widgets in the store
    pub total: u64,
}

impl From<PaginatedResult> for PaginatedWidgetsResponse {
    fn from(page: PaginatedResult) -> Self {
        Self {
            items: page.items.into_iter().map(WidgetResponse::from).collect(),
            total: page.total as u64,
        }
    }
}

#[derive(ApiResponse)]
pub enum CreateWidgetApiResponse {
    /// Widget created
    #[oai(status = 201)]
    Created(Json<WidgetResponse>),
}

#[derive(ApiResponse)]
pub enum DeleteWidgetApiResponse {
    /// Widget deleted
    #[oai(status = 204)]
    NoContent,
}
