use serde::Serialize;

/// Number of user cards shown per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 8;

/// Computes the sequence of page links to render: edge pages, a window around
/// the current page, and `None` gaps where page numbers are elided.
fn page_links(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let mut links = Vec::new();

    let left_end = (1 + left_edge).min(total_pages + 1);
    links.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(total_pages + 1);

    if mid_start > left_end {
        links.push(None);
    }
    links.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        links.push(None);
    }
    links.extend((right_start..=total_pages).map(Some));

    links
}

/// One page of items together with everything the pagination controls need.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page links in display order; `None` marks an ellipsis gap.
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    /// Count of all records matching the current filter, not just this page.
    pub total: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize, total: usize) -> Self {
        let current_page = current_page.max(1);

        let pages = page_links(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total,
        }
    }
}
