// Stores layer - Data access and repository pattern
pub mod widget_store;

pub use widget_store::{InMemoryWidgetStore, WidgetStore};
