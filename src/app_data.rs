use std::sync::Arc;
use crate::services::WidgetService;
use crate::stores::{InMemoryWidgetStore, WidgetStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across the API.
///
/// # Architecture
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(widget_store)
///   ↓ creates once
///   ├─ widget_store (Arc<dyn WidgetStore>)
///   └─ widget_service (Arc<WidgetService>)  → wraps widget_store
///   ↓ wrapped in Arc<AppData>
///   ↓ passed to APIs
///   └─ WidgetApi::new(app_data) → extracts widget_service
/// ```
pub struct AppData {
    pub widget_store: Arc<dyn WidgetStore>,
    pub widget_service: Arc<WidgetService>,
}

impl AppData {
    /// Initialize all application data on top of the given store
    pub fn init(widget_store: Arc<dyn WidgetStore>) -> Self {
        tracing::info!("Initializing AppData...");

        let widget_service = Arc::new(WidgetService::new(Arc::clone(&widget_store)));

        tracing::info!("AppData initialization complete");

        Self {
            widget_store,
            widget_service,
        }
    }

    /// AppData backed by an empty in-memory store
    pub fn in_memory() -> Self {
        Self::init(Arc::new(InMemoryWidgetStore::new()))
    }
}
