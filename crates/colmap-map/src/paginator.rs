//! Fixed-size pages over the source column list.

use std::ops::Range;

/// One slot of a page. The last page is padded with placeholders so every
/// page has the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot<T> {
    Item(T),
    Placeholder,
}

impl<T> PageSlot<T> {
    pub fn item(&self) -> Option<&T> {
        match self {
            Self::Item(item) => Some(item),
            Self::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Page cursor over `item_count` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    item_count: usize,
    page: usize,
}

impl Paginator {
    /// Create a paginator on page 0. A page size of zero is treated as one.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            item_count,
            page: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Number of pages; an empty list still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.item_count.div_ceil(self.page_size).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Advance one page. Returns false (and stays put) on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page. Returns false (and stays put) on page 0.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Item indices on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.item_count);
        let end = (start + self.page_size).min(self.item_count);
        start..end
    }

    /// Slots of the current page, padded to `page_size`.
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> Vec<PageSlot<&'a T>> {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        let mut slots: Vec<PageSlot<&T>> = items[start..end].iter().map(PageSlot::Item).collect();
        slots.resize(self.page_size, PageSlot::Placeholder);
        slots
    }
}
