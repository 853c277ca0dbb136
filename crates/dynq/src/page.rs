//! Paginated result container returned by the search pipeline.

///
/// Page
///
/// One page of projected records plus the pagination metadata callers need
/// to render further pages. `total_records` counts the filtered set, not the
/// page.
///

#[derive(Clone, Debug)]
pub struct Page<R> {
    /// 1-based page number this page was cut for.
    pub page: u32,
    /// Requested items per page; the final page may hold fewer.
    pub page_size: u32,
    /// Filtered record count before pagination.
    pub total_records: usize,
    /// The page's records.
    pub items: Vec<R>,
}

impl<R> Page<R> {
    /// Cut one page out of the full, ordered result set.
    #[must_use]
    pub fn cut(records: Vec<R>, page: u32, page_size: u32) -> Self {
        let total_records = records.len();
        let skip = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        let items: Vec<R> = records
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect();

        Self {
            page,
            page_size,
            total_records,
            items,
        }
    }

    /// Number of pages the filtered set spans at this page size.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }

        self.total_records.div_ceil(self.page_size as usize)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
