//! 1-based page arithmetic.

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// `ceil(len / size)`; an empty list has 0 pages
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `1..=max(pages, 1)`
pub fn clamp_page(page: usize, pages: usize) -> usize {
    page.clamp(1, pages.max(1))
}

/// Half-open index window of `page`
pub fn page_bounds(len: usize, page: usize, page_size: usize) -> (usize, usize) {
    let size = page_size.max(1);
    let start = (page.max(1) - 1).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    (start, end)
}

pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let (start, end) = page_bounds(items.len(), page, page_size);
    &items[start..end]
}
