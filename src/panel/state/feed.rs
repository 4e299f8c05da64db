//! Paged comment feed with exhaustion tracking.

use crate::store::{Comment, PageSize};

/// How a fetched page is merged into the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Clear the feed before inserting the page (initial load).
    Replace,
    /// Extend the feed after the existing comments (load more).
    Append,
}

/// Zero-based item window requested from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Index of the first item requested.
    pub offset: u64,
    /// Number of items requested.
    pub limit: u32,
}

/// Ordered comment list plus the paging cursor and exhaustion flag.
///
/// Display order is insertion order: fetched pages keep the store's
/// newest-first ordering, while a just-submitted comment is prepended to the
/// head regardless of its timestamp.
#[derive(Debug, Default)]
pub struct CommentFeed {
    comments: Vec<Comment>,
    /// Next page index to request; advances only after a successful,
    /// non-empty page fetch.
    page_cursor: u32,
    exhausted: bool,
}

impl CommentFeed {
    /// Creates an empty feed with the cursor at page zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            comments: Vec::new(),
            page_cursor: 0,
            exhausted: false,
        }
    }

    /// Comments in display order, newest-first for fetched pages.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Number of comments currently held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.comments.len()
    }

    /// Returns true when the feed holds no comments.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Returns true until a short page marks the collection exhausted.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        !self.exhausted
    }

    /// Next page index to request.
    #[must_use]
    pub const fn page_cursor(&self) -> u32 {
        self.page_cursor
    }

    /// Whether a fetch in the given mode may be issued.
    ///
    /// Appending fetches stop once the collection is exhausted; a replacing
    /// (initial) fetch is always allowed.
    #[must_use]
    pub const fn should_fetch(&self, mode: PageMode) -> bool {
        !(self.exhausted && matches!(mode, PageMode::Append))
    }

    /// Item window for the next page at the given page size.
    #[must_use]
    pub const fn next_window(&self, page_size: PageSize) -> PageWindow {
        let size = page_size.get();
        PageWindow {
            offset: self.page_cursor as u64 * size as u64,
            limit: size,
        }
    }

    /// Merges a successfully fetched page into the feed.
    ///
    /// A page shorter than `page_size` marks the collection exhausted
    /// permanently; a non-empty page advances the cursor by one. Replace
    /// mode clears existing comments first.
    pub fn apply_page(&mut self, page: Vec<Comment>, mode: PageMode, page_size: PageSize) {
        if matches!(mode, PageMode::Replace) {
            self.comments.clear();
        }
        if page.len() < page_size.get() as usize {
            self.exhausted = true;
        }
        if !page.is_empty() {
            self.page_cursor = self.page_cursor.saturating_add(1);
        }
        self.comments.extend(page);
    }

    /// Inserts a just-submitted comment at the head of the feed.
    ///
    /// The comment is not re-sorted into timestamp position.
    pub fn prepend(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::store::models::test_support::{comment_page, minimal_comment};

    fn page_size(value: u32) -> PageSize {
        PageSize::new(value).expect("page size should be valid")
    }

    #[test]
    fn new_feed_is_empty_and_not_exhausted() {
        let feed = CommentFeed::new();
        assert!(feed.is_empty());
        assert!(feed.has_more());
        assert_eq!(feed.page_cursor(), 0);
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn full_page_never_exhausts(#[case] size: u32) {
        let mut feed = CommentFeed::new();
        feed.apply_page(comment_page(u64::from(size)), PageMode::Replace, page_size(size));
        assert!(feed.has_more());
        assert_eq!(feed.page_cursor(), 1);
    }

    #[rstest]
    #[case(2, 1)]
    #[case(5, 3)]
    #[case(5, 0)]
    fn short_page_exhausts_permanently(#[case] size: u32, #[case] returned: u64) {
        let mut feed = CommentFeed::new();
        feed.apply_page(comment_page(returned), PageMode::Replace, page_size(size));
        assert!(!feed.has_more());
        // Still exhausted after a later full page (only re-initialisation
        // resets the flag, which means building a fresh feed).
        feed.apply_page(comment_page(u64::from(size)), PageMode::Append, page_size(size));
        assert!(!feed.has_more());
    }

    #[test]
    fn cursor_advances_only_on_non_empty_pages() {
        let mut feed = CommentFeed::new();
        feed.apply_page(Vec::new(), PageMode::Replace, page_size(5));
        assert_eq!(feed.page_cursor(), 0);
        feed.apply_page(comment_page(5), PageMode::Replace, page_size(5));
        assert_eq!(feed.page_cursor(), 1);
        feed.apply_page(comment_page(3), PageMode::Append, page_size(5));
        assert_eq!(feed.page_cursor(), 2);
    }

    #[test]
    fn next_window_is_cursor_times_page_size() {
        let mut feed = CommentFeed::new();
        assert_eq!(
            feed.next_window(page_size(5)),
            PageWindow { offset: 0, limit: 5 }
        );
        feed.apply_page(comment_page(5), PageMode::Replace, page_size(5));
        assert_eq!(
            feed.next_window(page_size(5)),
            PageWindow { offset: 5, limit: 5 }
        );
    }

    #[test]
    fn replace_clears_existing_comments() {
        let mut feed = CommentFeed::new();
        feed.apply_page(comment_page(5), PageMode::Replace, page_size(5));
        feed.apply_page(comment_page(2), PageMode::Replace, page_size(5));
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn append_extends_in_fetch_order() {
        let mut feed = CommentFeed::new();
        feed.apply_page(comment_page(5), PageMode::Replace, page_size(5));
        feed.apply_page(
            vec![minimal_comment(6, "bob", "older")],
            PageMode::Append,
            page_size(5),
        );
        assert_eq!(feed.len(), 6);
        assert_eq!(feed.comments().last().map(|c| c.id), Some(6));
    }

    #[test]
    fn appending_fetch_is_blocked_once_exhausted() {
        let mut feed = CommentFeed::new();
        feed.apply_page(comment_page(2), PageMode::Replace, page_size(5));
        assert!(!feed.should_fetch(PageMode::Append));
        // The initial (replace) fetch stays allowed, mirroring initial-load
        // semantics.
        assert!(feed.should_fetch(PageMode::Replace));
    }

    #[test]
    fn prepend_puts_comment_at_head_regardless_of_timestamp() {
        let mut feed = CommentFeed::new();
        feed.apply_page(comment_page(3), PageMode::Replace, page_size(5));
        // Older than everything already in the feed.
        let submitted = minimal_comment(99, "bob", "late submission");
        feed.prepend(submitted.clone());
        assert_eq!(feed.comments().first(), Some(&submitted));
        assert_eq!(feed.len(), 4);
    }
}
