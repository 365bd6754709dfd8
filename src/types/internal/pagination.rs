use crate::types::internal::widget::Widget;

/// One page of widgets plus the size of the whole collection
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResult {
    /// Widgets on the requested page, in insertion order
    pub items: Vec<Widget>,

    /// Number of widgets in the store, not the number on this page
    pub total: usize,
}

impl PaginatedResult {
    pub fn new(items: Vec<Widget>, total: usize) -> Self {
        Self { items, total }
    }

    /// Page past the end of the collection
    pub fn empty(total: usize) -> Self {
        Self {
            items: Vec::new(),
            total,
        }
    }
}

/// Resolve a 1-based page request into a `start..end` slice range
///
/// Returns `None` when the page falls outside `0..total`, including negative
/// offsets and non-positive page sizes. Arithmetic saturates so extreme
/// inputs cannot overflow.
pub fn page_bounds(page: i64, page_size: i64, total: usize) -> Option<(usize, usize)> {
    let total = i64::try_from(total).unwrap_or(i64::MAX);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total);

    if start < 0 || start >= total || end <= start {
        return None;
    }

    Some((start as usize, end as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_bounds_first_page() {
        assert_eq!(page_bounds(1, 4, 10), Some((0, 4)));
    }

    #[test]
    fn test_page_bounds_last_partial_page() {
        assert_eq!(page_bounds(3, 4, 10), Some((8, 10)));
    }

    #[test]
    fn test_page_bounds_past_end() {
        assert_eq!(page_bounds(99, 4, 10), None);
        assert_eq!(page_bounds(4, 4, 12), None);
    }

    #[test]
    fn test_page_bounds_negative_start() {
        assert_eq!(page_bounds(0, 4, 10), None);
        assert_eq!(page_bounds(-3, 4, 10), None);
    }

    #[test]
    fn test_page_bounds_non_positive_page_size() {
        assert_eq!(page_bounds(1, 0, 10), None);
        assert_eq!(page_bounds(2, -4, 10), None);
    }

    #[test]
    fn test_page_bounds_empty_collection() {
        assert_eq!(page_bounds(1, 4, 0), None);
    }

    #[test]
    fn test_page_bounds_does_not_overflow() {
        assert_eq!(page_bounds(i64::MAX, i64::MAX, 10), None);
        assert_eq!(page_bounds(i64::MIN, 4, 10), None);
    }
}
