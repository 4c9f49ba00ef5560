use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A 1-based page over a sequence ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    size: u32
}

impl Pagination {
    pub fn new(page: Option<u32>, size: u32) -> Pagination {
        Pagination {
            page: page.unwrap_or(1),
            size
        }
    }

    /// Index range covered by this page. Page 0 has no items.
    pub fn window(&self) -> Range<usize> {
        match self.page.checked_sub(1) {
            Some(before) => {
                let start = before as usize * self.size as usize;
                start..start + self.size as usize
            }
            None => 0..0
        }
    }

    pub fn offset(&self) -> i64 {
        self.window().start as i64
    }

    pub fn limit(&self) -> i64 {
        self.window().len() as i64
    }

    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.window();
        let start = start.min(items.len());
        let end = end.min(items.len());
        &items[start..end]
    }
}
