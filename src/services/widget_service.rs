use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::InternalError;
use crate::stores::WidgetStore;
use crate::types::internal::context::RequestContext;
use crate::types::internal::{PaginatedResult, Widget, WidgetPatch};

/// Widget service that enforces the business rules on top of a WidgetStore
///
/// Owns the uniqueness check on create and the existence checks on read,
/// update and delete. Mutating operations run under a single write lock so a
/// check and the mutation that depends on it cannot interleave with another
/// writer.
pub struct WidgetService {
    widget_store: Arc<dyn WidgetStore>,
    write_lock: Mutex<()>,
}

impl WidgetService {
    /// Create a new WidgetService over the given store
    pub fn new(widget_store: Arc<dyn WidgetStore>) -> Self {
        Self {
            widget_store,
            write_lock: Mutex::new(()),
        }
    }

    fn lock_writes(&self) -> Result<MutexGuard<'_, ()>, InternalError> {
        self.write_lock
            .lock()
            .map_err(|_| InternalError::lock_poisoned("widget_writes"))
    }

    /// List every widget in insertion order
    pub fn get_all_widgets(&self, ctx: &RequestContext) -> Result<Vec<Widget>, InternalError> {
        let widgets = self.widget_store.find_all()?;
        tracing::debug!(request_id = %ctx.request_id, "Listed {} widgets", widgets.len());
        Ok(widgets)
    }

    /// Fetch one page of widgets
    ///
    /// `page` and `page_size` are passed through untouched; out-of-range pages
    /// come back empty with the full total.
    pub fn get_paginated_widgets(
        &self,
        ctx: &RequestContext,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult, InternalError> {
        tracing::debug!(
            request_id = %ctx.request_id,
            "Fetching widget page {} (page size {})",
            page,
            page_size
        );
        self.widget_store.find_paginated(page, page_size)
    }

    /// Create a widget whose name is not yet taken
    ///
    /// # Arguments
    /// * `ctx` - Request context for logging
    /// * `widget` - Validated widget to store
    ///
    /// # Returns
    /// * `Ok(Widget)` - The stored widget
    /// * `Err(InternalError)` - `WidgetError::AlreadyExists` if the name is taken, or a storage failure
    pub fn create_widget(&self, ctx: &RequestContext, widget: Widget) -> Result<Widget, InternalError> {
        tracing::info!(request_id = %ctx.request_id, "Creating widget with name: {}", widget.name);

        let _guard = self.lock_writes()?;

        if self.widget_store.exists_by_name(&widget.name)? {
            return Err(InternalError::already_exists(widget.name));
        }

        self.widget_store.save(widget)
    }

    /// Look up a widget by its exact name
    ///
    /// # Returns
    /// * `Ok(Widget)` - The matching widget
    /// * `Err(InternalError)` - `WidgetError::NotFound` if no widget has that name
    pub fn get_widget_by_name(&self, ctx: &RequestContext, name: &str) -> Result<Widget, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, "Retrieving widget with name: {}", name);

        self.widget_store
            .find_by_name(name)?
            .ok_or_else(|| InternalError::not_found(name))
    }

    /// Apply a partial update to an existing widget
    ///
    /// Only fields present in `patch` change; the name never does.
    ///
    /// # Arguments
    /// * `ctx` - Request context for logging
    /// * `name` - Name of the widget to update
    /// * `patch` - Validated description and/or price
    ///
    /// # Returns
    /// * `Ok(Widget)` - The widget as stored after the update
    /// * `Err(InternalError)` - `WidgetError::NotFound` if no widget has that name
    pub fn update_widget(
        &self,
        ctx: &RequestContext,
        name: &str,
        patch: WidgetPatch,
    ) -> Result<Widget, InternalError> {
        tracing::info!(request_id = %ctx.request_id, "Updating widget with name: {}", name);

        let _guard = self.lock_writes()?;

        let mut existing = self
            .widget_store
            .find_by_name(name)?
            .ok_or_else(|| InternalError::not_found(name))?;

        existing.apply(patch);

        self.widget_store.save(existing)
    }

    /// Delete a widget by name
    ///
    /// # Returns
    /// * `Ok(())` - Widget removed
    /// * `Err(InternalError)` - `WidgetError::NotFound` if no widget has that name
    pub fn delete_widget(&self, ctx: &RequestContext, name: &str) -> Result<(), InternalError> {
        tracing::info!(request_id = %ctx.request_id, "Deleting widget with name: {}", name);

        let _guard = self.lock_writes()?;

        if !self.widget_store.exists_by_name(name)? {
            return Err(InternalError::not_found(name));
        }

        let remaining = self.widget_store.delete_by_name(name)?;
        tracing::info!(
            request_id = %ctx.request_id,
            "Widget with name '{}' deleted successfully ({} remaining)",
            name,
            remaining.len()
        );

        Ok(())
    }
}
