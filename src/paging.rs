//! Pagination Helpers
//!
//! Pure page math for the client-side item listing.

use std::ops::Range;

/// Rows shown per page
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `count` items (0 for an empty collection)
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Whether `page` (1-indexed) addresses an existing page
pub fn is_valid_page(page: usize, count: usize) -> bool {
    page >= 1 && page <= total_pages(count)
}

/// Index range of the rows visible on `page`, clamped to the collection.
///
/// Returns an empty range for out-of-range pages.
pub fn page_range(page: usize, count: usize) -> Range<usize> {
    if !is_valid_page(page, count) {
        return 0..0;
    }
    let start = (page - 1) * PAGE_SIZE;
    start..(start + PAGE_SIZE).min(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(6), 2);
        assert_eq!(total_pages(12), 3);
    }

    #[test]
    fn test_page_range_twelve_items() {
        // 12 items: pages 1 and 2 full, page 3 holds items 11-12 only
        assert_eq!(page_range(1, 12), 0..5);
        assert_eq!(page_range(2, 12), 5..10);
        assert_eq!(page_range(3, 12), 10..12);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        assert_eq!(page_range(0, 12), 0..0);
        assert_eq!(page_range(4, 12), 0..0);
        assert_eq!(page_range(1, 0), 0..0);
    }

    #[test]
    fn test_is_valid_page_guard() {
        assert!(!is_valid_page(0, 12));
        assert!(is_valid_page(1, 12));
        assert!(is_valid_page(3, 12));
        assert!(!is_valid_page(4, 12));
        assert!(!is_valid_page(1, 0));
    }

    #[test]
    fn test_pages_partition_collection() {
        // Concatenating every page's slice reconstructs the original order
        // exactly once, with no gaps or duplicates.
        for count in [0, 1, 4, 5, 6, 12, 13, 27] {
            let items: Vec<usize> = (0..count).collect();
            let mut rebuilt = Vec::new();
            for page in 1..=total_pages(count) {
                rebuilt.extend_from_slice(&items[page_range(page, count)]);
            }
            assert_eq!(rebuilt, items, "count {}", count);
        }
    }
}
