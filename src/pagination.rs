// src/pagination.rs
//! Client-side pagination over an in-memory list.

/// Fixed listing page size.
pub const PAGE_SIZE: usize = 20;

/// `ceil(count / page_size)`; zero items means zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamp a requested 1-based page into `1..=max(total, 1)`.
pub fn clamp_page(requested: usize, total: usize) -> usize {
    requested.clamp(1, total.max(1))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Every page index for the controls; empty when there is nothing to page.
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        if self.total_pages == 0 {
            #[allow(clippy::reversed_empty_ranges)]
            return 1..=0;
        }
        1..=self.total_pages
    }
}

/// Slice `[(page-1)*size, page*size)` of `items`, with the page clamped first.
pub fn paginate<T>(items: &[T], page: usize) -> Page<'_, T> {
    paginate_with(items, page, PAGE_SIZE)
}

pub fn paginate_with<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let total = total_pages(items.len(), page_size);
    let number = clamp_page(page, total);
    let start = ((number - 1) * page_size).min(items.len());
    let end = (number * page_size).min(items.len());
    Page {
        items: &items[start..end],
        number,
        total_pages: total,
        total_items: items.len(),
    }
}
