use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::InternalError;
use crate::types::internal::pagination::page_bounds;
use crate::types::internal::{PaginatedResult, Widget};

/// Storage interface for widgets, keyed by name
///
/// Implementations own the collection. Every read hands back copies, so the
/// only way to change stored state is through `save` and `delete_by_name`.
pub trait WidgetStore: Send + Sync {
    /// All widgets in insertion order
    fn find_all(&self) -> Result<Vec<Widget>, InternalError>;

    /// Exact, case-sensitive lookup by name
    fn find_by_name(&self, name: &str) -> Result<Option<Widget>, InternalError>;

    fn exists_by_name(&self, name: &str) -> Result<bool, InternalError>;

    /// One page of widgets, `page` starting at 1
    ///
    /// A page outside the collection yields no items; `total` is always the
    /// size of the whole collection.
    fn find_paginated(&self, page: i64, page_size: i64) -> Result<PaginatedResult, InternalError>;

    /// Insert or replace by name, returning the stored widget
    fn save(&self, widget: Widget) -> Result<Widget, InternalError>;

    /// Remove the widget with `name` if present and return what remains
    fn delete_by_name(&self, name: &str) -> Result<Vec<Widget>, InternalError>;
}

/// In-memory WidgetStore backed by an insertion-ordered list
///
/// A replaced widget keeps its position; new names are appended.
pub struct InMemoryWidgetStore {
    widgets: RwLock<Vec<Widget>>,
}

impl InMemoryWidgetStore {
    pub fn new() -> Self {
        Self {
            widgets: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Widget>>, InternalError> {
        self.widgets
            .read()
            .map_err(|_| InternalError::lock_poisoned("widgets"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Widget>>, InternalError> {
        self.widgets
            .write()
            .map_err(|_| InternalError::lock_poisoned("widgets"))
    }
}

impl Default for InMemoryWidgetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetStore for InMemoryWidgetStore {
    fn find_all(&self) -> Result<Vec<Widget>, InternalError> {
        Ok(self.read()?.clone())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Widget>, InternalError> {
        Ok(self
            .read()?
            .iter()
            .find(|widget| widget.name == name)
            .cloned())
    }

    fn exists_by_name(&self, name: &str) -> Result<bool, InternalError> {
        Ok(self.read()?.iter().any(|widget| widget.name == name))
    }

    fn find_paginated(&self, page: i64, page_size: i64) -> Result<PaginatedResult, InternalError> {
        let widgets = self.read()?;
        let total = widgets.len();

        let result = match page_bounds(page, page_size, total) {
            Some((start, end)) => PaginatedResult::new(widgets[start..end].to_vec(), total),
            None => PaginatedResult::empty(total),
        };

        tracing::trace!(
            "Paginated widgets: page={} page_size={} returned={} total={}",
            page,
            page_size,
            result.items.len(),
            total
        );

        Ok(result)
    }

    fn save(&self, widget: Widget) -> Result<Widget, InternalError> {
        let mut widgets = self.write()?;

        match widgets.iter().position(|existing| existing.name == widget.name) {
            Some(index) => widgets[index] = widget.clone(),
            None => widgets.push(widget.clone()),
        }

        Ok(widget)
    }

    fn delete_by_name(&self, name: &str) -> Result<Vec<Widget>, InternalError> {
        let mut widgets = self.write()?;
        widgets.retain(|widget| widget.name != name);
        Ok(widgets.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{numbered_widgets, sample_widget};

    fn store_with(widgets: Vec<Widget>) -> InMemoryWidgetStore {
        let store = InMemoryWidgetStore::new();
        for widget in widgets {
            store.save(widget).unwrap();
        }
        store
    }

    #[test]
    fn test_find_all_on_empty_store() {
        let store = InMemoryWidgetStore::new();
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_find_all_preserves_insertion_order() {
        let store = store_with(numbered_widgets(3));

        let names: Vec<_> = store.find_all().unwrap().into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Widget 01", "Widget 02", "Widget 03"]);
    }

    #[test]
    fn test_find_all_returns_a_copy() {
        let store = store_with(vec![sample_widget("Sprocket")]);

        let mut copy = store.find_all().unwrap();
        copy[0].description = "Mutated outside the store".to_string();
        copy.clear();

        let stored = store.find_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], sample_widget("Sprocket"));
    }

    #[test]
    fn test_find_by_name_is_exact_and_case_sensitive() {
        let store = store_with(vec![sample_widget("Sprocket")]);

        assert_eq!(store.find_by_name("Sprocket").unwrap(), Some(sample_widget("Sprocket")));
        assert_eq!(store.find_by_name("sprocket").unwrap(), None);
        assert_eq!(store.find_by_name("Sprock").unwrap(), None);
    }

    #[test]
    fn test_exists_by_name() {
        let store = store_with(vec![sample_widget("Sprocket")]);

        assert!(store.exists_by_name("Sprocket").unwrap());
        assert!(!store.exists_by_name("Gizmo").unwrap());
    }

    #[test]
    fn test_save_replaces_existing_name_in_place() {
        let store = store_with(numbered_widgets(3));

        let mut replacement = sample_widget("Widget 01");
        replacement.price = 999.0;
        let saved = store.save(replacement.clone()).unwrap();
        assert_eq!(saved, replacement);

        let all = store.find_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], replacement);
        assert_eq!(all.iter().filter(|w| w.name == "Widget 01").count(), 1);
    }

    #[test]
    fn test_delete_by_name_removes_match() {
        let store = store_with(numbered_widgets(3));

        let remaining = store.delete_by_name("Widget 02").unwrap();

        let names: Vec<_> = remaining.into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Widget 01", "Widget 03"]);
        assert!(!store.exists_by_name("Widget 02").unwrap());
    }

    #[test]
    fn test_delete_by_name_absent_is_noop() {
        let store = store_with(numbered_widgets(2));

        let remaining = store.delete_by_name("Nope").unwrap();
        assert_eq!(remaining, numbered_widgets(2));
    }

    #[test]
    fn test_find_paginated_second_page() {
        let store = store_with(numbered_widgets(10));

        let page = store.find_paginated(2, 4).unwrap();

        assert_eq!(page.total, 10);
        assert_eq!(page.items, numbered_widgets(10)[4..8].to_vec());
    }

    #[test]
    fn test_find_paginated_partial_last_page() {
        let store = store_with(numbered_widgets(10));

        let page = store.find_paginated(3, 4).unwrap();

        assert_eq!(page.total, 10);
        assert_eq!(page.items, numbered_widgets(10)[8..10].to_vec());
    }

    #[test]
    fn test_find_paginated_past_end_is_empty_not_error() {
        let store = store_with(numbered_widgets(10));

        let page = store.find_paginated(99, 4).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 10);
    }

    #[test]
    fn test_find_paginated_negative_start_is_empty() {
        let store = store_with(numbered_widgets(10));

        let page = store.find_paginated(0, 4).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 10);
    }

    #[test]
    fn test_find_paginated_on_empty_store() {
        let store = InMemoryWidgetStore::new();

        let page = store.find_paginated(1, 4).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_poisoned_lock_surfaces_as_internal_error() {
        let store = std::sync::Arc::new(InMemoryWidgetStore::new());

        let poisoner = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.widgets.write().unwrap();
            panic!("poison the widget lock");
        })
        .join();

        let result = store.find_all();
        assert!(matches!(result, Err(InternalError::Storage(_))));
    }
}
