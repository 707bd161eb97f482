//! Pull request and review listing through Octocrab.

use async_trait::async_trait;
use octocrab::Page;

use crate::github::error::IntakeError;
use crate::github::locator::{PullRequestNumber, RepositoryLocator};
use crate::github::models::{ApiPullRequest, ApiReview, PullRequestRecord, Review};
use crate::github::pagination::PageInfo;

use super::PullRequestGateway;
use super::client::OctocrabGateway;

mod types;

pub use types::{
    ListPullRequestsParams, PullRequestPage, PullRequestSort, PullRequestState, SortDirection,
};

const REVIEWS_PER_PAGE: &str = "100";

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
        params: &ListPullRequestsParams,
    ) -> Result<PullRequestPage, IntakeError> {
        params.validate()?;

        let page_str = params.page.to_string();
        let per_page_str = params.per_page.to_string();

        let query_params = [
            ("state", params.state.as_str()),
            ("sort", params.sort.as_str()),
            ("direction", params.direction.as_str()),
            ("page", page_str.as_str()),
            ("per_page", per_page_str.as_str()),
        ];

        let page_result: Page<ApiPullRequest> = match self
            .client
            .get(locator.pulls_path(), Some(&query_params))
            .await
        {
            Ok(page_result) => page_result,
            Err(error) => return Err(self.map_error("list pulls", &error).await),
        };

        // Link header state must be read before the items are consumed.
        let has_next = page_result.next.is_some();
        let total_pages = page_result.number_of_pages();

        let items: Vec<PullRequestRecord> = page_result
            .items
            .into_iter()
            .map(ApiPullRequest::into)
            .collect();

        let page_info = PageInfo::builder(params.page, params.per_page)
            .total_pages(total_pages)
            .has_next(has_next)
            .build();

        Ok(PullRequestPage { items, page_info })
    }

    async fn list_reviews(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<Review>, IntakeError> {
        let query_params = [("per_page", REVIEWS_PER_PAGE)];

        let reviews: Vec<ApiReview> = match self
            .client
            .get(locator.reviews_path(number), Some(&query_params))
            .await
        {
            Ok(reviews) => reviews,
            Err(error) => return Err(self.map_error("list reviews", &error).await),
        };

        Ok(reviews
            .into_iter()
            .map(|review| review.into_review(number.get()))
            .collect())
    }
}
