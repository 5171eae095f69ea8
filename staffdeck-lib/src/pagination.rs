//! Pagination engine.
//!
//! Computes the visible page-number window shown in the pagination bar and
//! the next/previous transitions with boundary clamping. The window always
//! anchors on the first and last page; an elided range on either side is
//! represented by [`PageItem::Ellipsis`].

use crate::notify::{self, EventReceiver, EventSender};

/// Maximum number of page buttons in the centered window.
pub const MAX_VISIBLE: u32 = 5;

/// One entry of the visible page sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A concrete page number.
    Page(u32),
    /// A placeholder for an elided range of pages.
    Ellipsis,
}

/// Compute the visible page sequence for the pagination bar.
///
/// Page 1 is always present; the last page is appended whenever
/// `total_pages > 1`. Around `current_page` a window of at most
/// [`MAX_VISIBLE`] pages is kept, widened toward the nearer edge when the
/// current page sits close to it. Duplicate page numbers are removed while
/// preserving order; ellipsis entries are kept as-is (there can be one on
/// each side of the window).
///
/// A `current_page` outside `[1, total_pages]` is accepted and yields a
/// degenerate window rather than an error; `total_pages` of 0 or 1 yields
/// `[Page(1)]`.
pub fn visible_pages(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    let half = MAX_VISIBLE / 2;
    let last_inner = total_pages.saturating_sub(1);

    let mut start = current_page.saturating_sub(half).max(2);
    let mut end = (current_page + half).min(last_inner);

    if current_page <= half + 1 {
        end = MAX_VISIBLE.min(last_inner);
    }
    if current_page + half >= total_pages {
        start = total_pages.saturating_sub(MAX_VISIBLE - 1).max(2);
    }

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    for page in start..=end {
        items.push(PageItem::Page(page));
    }
    if end + 1 < total_pages {
        items.push(PageItem::Ellipsis);
    }
    if total_pages > 1 {
        items.push(PageItem::Page(total_pages));
    }

    dedup_pages(items)
}

/// Remove repeated page numbers, keeping first occurrences and every
/// ellipsis.
fn dedup_pages(items: Vec<PageItem>) -> Vec<PageItem> {
    let mut seen = Vec::new();
    items
        .into_iter()
        .filter(|item| match item {
            PageItem::Page(n) => {
                if seen.contains(n) {
                    false
                } else {
                    seen.push(*n);
                    true
                }
            }
            PageItem::Ellipsis => true,
        })
        .collect()
}

/// Next page, clamped so it never exceeds `total_pages`.
pub fn advance(current_page: u32, total_pages: u32) -> u32 {
    if current_page < total_pages {
        current_page + 1
    } else {
        current_page
    }
}

/// Previous page, clamped so it never goes below 1.
pub fn retreat(current_page: u32) -> u32 {
    if current_page > 1 { current_page - 1 } else { current_page }
}

/// Pagination state plus a thin notifier.
///
/// Holds the two integers and tells a single external listener whenever the
/// page changes. No other state lives here; slicing the data to the current
/// page is the page controller's job.
#[derive(Debug)]
pub struct Pager {
    current_page: u32,
    total_pages: u32,
    listener: Option<EventSender<u32>>,
}

impl Pager {
    /// Create a pager on page 1.
    pub fn new(total_pages: u32) -> Self {
        Self {
            current_page: 1,
            total_pages,
            listener: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Replace the total page count. The current page is left untouched;
    /// callers clamp it when the data set shrinks.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
    }

    /// Register the page-changed listener, replacing any previous one.
    pub fn subscribe(&mut self) -> EventReceiver<u32> {
        let (tx, rx) = notify::channel();
        self.listener = Some(tx);
        rx
    }

    /// The visible page sequence for the current state.
    pub fn visible(&self) -> Vec<PageItem> {
        visible_pages(self.current_page, self.total_pages)
    }

    /// Move forward one page. No-op (and no notification) on the last page.
    pub fn advance(&mut self) -> u32 {
        let next = advance(self.current_page, self.total_pages);
        if next != self.current_page {
            self.current_page = next;
            self.notify();
        }
        self.current_page
    }

    /// Move back one page. No-op (and no notification) on page 1.
    pub fn retreat(&mut self) -> u32 {
        let prev = retreat(self.current_page);
        if prev != self.current_page {
            self.current_page = prev;
            self.notify();
        }
        self.current_page
    }

    /// Jump to a page verbatim and notify.
    ///
    /// No bounds validation happens here; the UI only offers in-range
    /// targets and the page controller clamps after data changes.
    pub fn jump_to(&mut self, page: u32) -> u32 {
        self.current_page = page;
        self.notify();
        self.current_page
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            listener.send(self.current_page);
        }
    }
}
