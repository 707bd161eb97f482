//! Mock GitHub responses for the pull request export BDD tests.

use serde_json::{Value, json};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, ResponseTemplate};

use super::runtime::{mount, server_uri};
use super::state::ExportState;

pub(crate) const PULL_REQUESTS_PER_PAGE: u64 = 2;

/// Pull request JSON as returned by `GET /repos/{owner}/{repo}/pulls`.
pub(crate) fn pull_request_json(number: u64, created_at: &str) -> Value {
    json!({
        "id": 1000 + number,
        "number": number,
        "created_at": created_at,
        "closed_at": null,
        "merged_at": null,
        "user": { "login": "contributor" },
        "requested_reviewers": [],
        "base": { "ref": "main" },
        "head": { "ref": format!("feature-{number}") }
    })
}

/// Mounts the pull request, review, and failure mocks described by the
/// scenario state for `owner/repo`.
pub(crate) fn mount_github_api(state: &ExportState, owner: &str, repo: &str) {
    let pulls_path = format!("/repos/{owner}/{repo}/pulls");

    if state.reject_token.get().unwrap_or(false) {
        let rejection = Mock::given(method("GET"))
            .and(path(pulls_path.as_str()))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({
                    "message": "Bad credentials",
                    "documentation_url": "https://docs.github.com/rest"
                })),
            );
        mount(&state.runtime, &state.server, rejection);
        return;
    }

    let pages = u64::from(state.pages.get().unwrap_or(1));
    let stale_page = state.stale_page.get().map(u64::from);
    let uri = server_uri(&state.server);
    let total = pages * PULL_REQUESTS_PER_PAGE;

    for page in 1..=pages {
        let items: Vec<Value> = (0..PULL_REQUESTS_PER_PAGE)
            .map(|offset| {
                let number = total - (page - 1) * PULL_REQUESTS_PER_PAGE - offset;
                let is_last_on_page = offset + 1 == PULL_REQUESTS_PER_PAGE;
                let created_at = if stale_page == Some(page) && is_last_on_page {
                    "2019-05-01T12:00:00Z".to_owned()
                } else {
                    format!("2019-07-{number:02}T12:00:00Z")
                };
                pull_request_json(number, &created_at)
            })
            .collect();

        let mut response = ResponseTemplate::new(200).set_body_json(items);
        if page < pages {
            let next = format!(
                "<{uri}{pulls_path}?state=all&sort=created&direction=desc&page={}&per_page=100>; \
                 rel=\"next\"",
                page + 1
            );
            response = response.insert_header("Link", next);
        }

        let mock = Mock::given(method("GET"))
            .and(path(pulls_path.as_str()))
            .and(query_param("page", page.to_string()))
            .respond_with(response);
        mount(&state.runtime, &state.server, mock);
    }

    let reviews = state.reviews.get().unwrap_or_else(|| json!([]));
    let reviews_mock = Mock::given(method("GET"))
        .and(path_regex(format!(r"^{pulls_path}/\d+/reviews$")))
        .respond_with(ResponseTemplate::new(200).set_body_json(reviews));
    mount(&state.runtime, &state.server, reviews_mock);
}
