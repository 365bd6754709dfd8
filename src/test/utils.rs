// Test utilities shared across unit tests
// Only compiled when running tests

use crate::app_data::AppData;
use crate::services::WidgetService;
use crate::stores::{InMemoryWidgetStore, WidgetStore};
use crate::types::internal::Widget;
use std::sync::Arc;

/// A valid widget with the given name
pub fn sample_widget(name: &str) -> Widget {
    Widget::new(name, "A dependable widget", 19.99)
}

/// `count` valid widgets named "Widget 01", "Widget 02", ...
///
/// Deterministic, so two calls with the same count produce equal lists.
pub fn numbered_widgets(count: usize) -> Vec<Widget> {
    (1..=count)
        .map(|n| {
            Widget::new(
                format!("Widget {:02}", n),
                format!("Description for widget {:02}", n),
                n as f64 * 10.0,
            )
        })
        .collect()
}

/// Creates an empty in-memory store and a service on top of it
///
/// Returns (store, service) so tests can inspect the store directly:
/// ```rust
/// let (store, service) = setup_test_widget_service();
/// ```
pub fn setup_test_widget_service() -> (Arc<InMemoryWidgetStore>, Arc<WidgetService>) {
    let store = Arc::new(InMemoryWidgetStore::new());
    let widget_store: Arc<dyn WidgetStore> = store.clone();
    let service = Arc::new(WidgetService::new(widget_store));
    (store, service)
}

/// Creates AppData backed by a fresh in-memory store
pub fn setup_test_app_data() -> Arc<AppData> {
    Arc::new(AppData::in_memory())
}
