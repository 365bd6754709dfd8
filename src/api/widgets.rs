use poem::Request;
use poem_openapi::{param::Path, param::Query, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::Api;
use crate::app_data::AppData;
use crate::errors::WidgetApiError;
use crate::services::{WidgetService, WidgetValidator};
use crate::types::dto::widget::{
    CreateWidgetApiResponse, CreateWidgetRequest, DeleteWidgetApiResponse,
    PaginatedWidgetsResponse, UpdateWidgetRequest, WidgetResponse,
};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 4;

/// Widget CRUD API endpoints
pub struct WidgetApi {
    widget_service: Arc<WidgetService>,
}

impl WidgetApi {
    /// Create a new WidgetApi from AppData
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            widget_service: Arc::clone(&app_data.widget_service),
        }
    }
}

/// API tags for widget endpoints
#[derive(Tags)]
enum WidgetTags {
    /// Widget management
    Widgets,
}

impl Api for WidgetApi {}

#[OpenApi]
impl WidgetApi {
    /// List all widgets in insertion order
    #[oai(path = "/widgets", method = "get", tag = "WidgetTags::Widgets")]
    async fn list_widgets(&self, req: &Request) -> Result<Json<Vec<WidgetResponse>>, WidgetApiError> {
        let ctx = self.request_context(req);

        let widgets = self.widget_service.get_all_widgets(&ctx)?;

        Ok(Json(widgets.into_iter().map(WidgetResponse::from).collect()))
    }

    /// List one page of widgets
    ///
    /// `page` is 1-based and defaults to 1; `pageSize` defaults to 4. A page
    /// beyond the end returns no items along with the total count.
    #[oai(path = "/widgets/paginated", method = "get", tag = "WidgetTags::Widgets")]
    async fn list_widgets_paginated(
        &self,
        req: &Request,
        page: Query<Option<i64>>,
        #[oai(name = "pageSize")] page_size: Query<Option<i64>>,
    ) -> Result<Json<PaginatedWidgetsResponse>, WidgetApiError> {
        let ctx = self.request_context(req);
        let page = page.0.unwrap_or(DEFAULT_PAGE);
        let page_size = page_size.0.unwrap_or(DEFAULT_PAGE_SIZE);

        let result = self
            .widget_service
            .get_paginated_widgets(&ctx, page, page_size)?;

        Ok(Json(result.into()))
    }

    /// Create a new widget
    #[oai(path = "/widgets", method = "post", tag = "WidgetTags::Widgets")]
    async fn create_widget(
        &self,
        req: &Request,
        body: Json<CreateWidgetRequest>,
    ) -> Result<CreateWidgetApiResponse, WidgetApiError> {
        let ctx = self.request_context(req);

        let widget = WidgetValidator::validate_new(&body).map_err(|errors| {
            tracing::warn!(
                request_id = %ctx.request_id,
                client = %ctx.client(),
                "Rejected widget create: {}",
                errors
            );
            WidgetApiError::validation_failed(errors)
        })?;

        let created = self.widget_service.create_widget(&ctx, widget)?;

        Ok(CreateWidgetApiResponse::Created(Json(created.into())))
    }

    /// Get a widget by name
    #[oai(path = "/widgets/:name", method = "get", tag = "WidgetTags::Widgets")]
    async fn get_widget(
        &self,
        req: &Request,
        name: Path<String>,
    ) -> Result<Json<WidgetResponse>, WidgetApiError> {
        let ctx = self.request_context(req);

        let widget = self.widget_service.get_widget_by_name(&ctx, &name)?;

        Ok(Json(widget.into()))
    }

    /// Update a widget's description and/or price
    #[oai(path = "/widgets/:name", method = "put", tag = "WidgetTags::Widgets")]
    async fn update_widget(
        &self,
        req: &Request,
        name: Path<String>,
        body: Json<UpdateWidgetRequest>,
    ) -> Result<Json<WidgetResponse>, WidgetApiError> {
        let ctx = self.request_context(req);

        let patch = WidgetValidator::validate_patch(&body).map_err(|errors| {
            tracing::warn!(
                request_id = %ctx.request_id,
                client = %ctx.client(),
                "Rejected widget update for {}: {}",
                name.0,
                errors
            );
            WidgetApiError::validation_failed(errors)
        })?;

        let updated = self.widget_service.update_widget(&ctx, &name, patch)?;

        Ok(Json(updated.into()))
    }

    /// Delete a widget by name
    #[oai(path = "/widgets/:name", method = "delete", tag = "WidgetTags::Widgets")]
    async fn delete_widget(
        &self,
        req: &Request,
        name: Path<String>,
    ) -> Result<DeleteWidgetApiResponse, WidgetApiError> {
        let ctx = self.request_context(req);

        self.widget_service.delete_widget(&ctx, &name)?;

        Ok(DeleteWidgetApiResponse::NoContent)
    }
}
