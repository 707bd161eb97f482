//! Request and response types for pull request listings.

use crate::github::error::IntakeError;
use crate::github::models::PullRequestRecord;
use crate::github::pagination::PageInfo;

/// Largest page size GitHub accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Pull request state filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullRequestState {
    /// Only open pull requests.
    Open,
    /// Only closed pull requests.
    Closed,
    /// All pull requests regardless of state.
    #[default]
    All,
}

impl PullRequestState {
    /// Returns the API parameter value for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

/// Field GitHub sorts pull request listings by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullRequestSort {
    /// Creation time.
    #[default]
    Created,
    /// Last update time.
    Updated,
}

impl PullRequestSort {
    /// Returns the API parameter value for this sort field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Oldest first.
    Ascending,
    /// Newest first.
    #[default]
    Descending,
}

impl SortDirection {
    /// Returns the API parameter value for this direction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Parameters for one pull request listing request.
///
/// The default requests every state, newest first by creation time, 100 per
/// page, starting at page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPullRequestsParams {
    /// State filter.
    pub state: PullRequestState,
    /// Sort field.
    pub sort: PullRequestSort,
    /// Sort direction.
    pub direction: SortDirection,
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page (max 100).
    pub per_page: u8,
}

impl ListPullRequestsParams {
    /// Copy of these parameters targeting another page.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Rejects page numbers and sizes GitHub would not honour.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidPagination`] for page 0, or a page size
    /// of 0 or above 100.
    pub fn validate(&self) -> Result<(), IntakeError> {
        let problem = if self.page == 0 {
            Some("page must be at least 1")
        } else if self.per_page == 0 {
            Some("per_page must be at least 1")
        } else if self.per_page > MAX_PER_PAGE {
            Some("per_page must not exceed 100")
        } else {
            None
        };

        problem.map_or(Ok(()), |message| {
            Err(IntakeError::InvalidPagination {
                message: message.to_owned(),
            })
        })
    }
}

impl Default for ListPullRequestsParams {
    fn default() -> Self {
        Self {
            state: PullRequestState::All,
            sort: PullRequestSort::Created,
            direction: SortDirection::Descending,
            page: 1,
            per_page: MAX_PER_PAGE,
        }
    }
}

/// One page of pull requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestPage {
    /// Pull requests on this page, in API order.
    pub items: Vec<PullRequestRecord>,
    /// Pagination state.
    pub page_info: PageInfo,
}
