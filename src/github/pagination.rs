//! Pagination state for GitHub list responses.
//!
//! `PageInfo` captures where a listing currently sits and whether GitHub
//! advertised a further page through its `Link` header.

/// Current page state for paginated results.
///
/// # Example
///
/// ```
/// use prharvest::github::PageInfo;
///
/// let info = PageInfo::builder(2, 100)
///     .total_pages(Some(5))
///     .has_next(true)
///     .build();
/// assert!(!info.is_last_page());
/// assert_eq!(info.next_page(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    current_page: u32,
    per_page: u8,
    total_pages: Option<u32>,
    has_next: bool,
}

/// Builder for [`PageInfo`].
#[derive(Debug, Clone, Copy)]
pub struct PageInfoBuilder {
    info: PageInfo,
}

impl PageInfo {
    /// Starts building page info for the given position and page size.
    #[must_use]
    pub const fn builder(current_page: u32, per_page: u8) -> PageInfoBuilder {
        PageInfoBuilder {
            info: Self {
                current_page,
                per_page,
                total_pages: None,
                has_next: false,
            },
        }
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the number of items requested per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns the total number of pages if GitHub reported a `last` link.
    #[must_use]
    pub const fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Returns true if more pages exist after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Returns true if this is the last page.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        !self.has_next
    }

    /// Page number to request next, or `None` on the last page.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_next {
            self.current_page.checked_add(1)
        } else {
            None
        }
    }
}

impl PageInfoBuilder {
    /// Sets the total number of pages.
    #[must_use]
    pub const fn total_pages(mut self, total_pages: Option<u32>) -> Self {
        self.info.total_pages = total_pages;
        self
    }

    /// Sets whether there is a next page.
    #[must_use]
    pub const fn has_next(mut self, has_next: bool) -> Self {
        self.info.has_next = has_next;
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub const fn build(self) -> PageInfo {
        self.info
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::builder(1, 100).build()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::PageInfo;

    #[rstest]
    #[case::middle(2, true, Some(3))]
    #[case::last(5, false, None)]
    #[case::overflow(u32::MAX, true, None)]
    fn next_page_follows_link_state(
        #[case] current: u32,
        #[case] has_next: bool,
        #[case] expected: Option<u32>,
    ) {
        let info = PageInfo::builder(current, 100).has_next(has_next).build();

        assert_eq!(info.next_page(), expected, "unexpected next page");
        assert_eq!(info.is_last_page(), !has_next, "unexpected last page flag");
    }

    #[rstest]
    fn accessors() {
        let info = PageInfo::builder(3, 25)
            .total_pages(Some(10))
            .has_next(true)
            .build();
        assert_eq!(info.current_page(), 3, "current page mismatch");
        assert_eq!(info.per_page(), 25, "per page mismatch");
        assert_eq!(info.total_pages(), Some(10), "total pages mismatch");
    }
}
