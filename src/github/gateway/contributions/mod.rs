//! Octocrab-backed gateway for repository, issue, and review comment
//! listings.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::StatsError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{
    ApiIssue, ApiRepository, ApiReviewComment, IssueSummary, RepositoryHandle, ReviewComment,
};
use crate::github::rate_limit::RateLimitInfo;
use crate::roster::RepositoryIdentifier;

use super::client::build_octocrab_client;
use super::error_mapping::{is_not_found, is_rate_limit_error, map_octocrab_error};
use super::{ContributionGateway, IssueQuery, PAGE_SIZE, ReviewCommentQuery};

/// Gateway for loading contribution data through Octocrab.
///
/// One client is built per run and shared by every query.
pub struct OctocrabContributionGateway {
    client: Octocrab,
}

impl OctocrabContributionGateway {
    /// Creates a gateway from an existing Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an authenticated client for the API at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the Octocrab client cannot be built.
    pub fn for_token(token: &PersonalAccessToken, api_base: &Url) -> Result<Self, StatsError> {
        let client = build_octocrab_client(token, api_base)?;
        Ok(Self::new(client))
    }

    /// Fetches the first page at `route` and then every following page.
    ///
    /// Octocrab follows the `Link: rel="next"` headers, so the caller gets
    /// one vector holding all matching items.
    async fn fetch_all<T, P>(
        &self,
        operation: &str,
        route: String,
        params: &P,
    ) -> Result<Vec<T>, StatsError>
    where
        T: DeserializeOwned,
        P: Serialize + Sync,
    {
        let first_page: Page<T> = match self.client.get(route, Some(params)).await {
            Ok(page) => page,
            Err(error) => return Err(self.map_error_with_rate_limit(operation, &error).await),
        };

        match self.client.all_pages(first_page).await {
            Ok(items) => Ok(items),
            Err(error) => Err(self.map_error_with_rate_limit(operation, &error).await),
        }
    }

    /// Maps an Octocrab error, turning rate limit refusals into
    /// [`StatsError::RateLimitExceeded`] with the quota when it can be read.
    async fn map_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> StatsError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                let base_message =
                    format!("{operation} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!("{base_message} ({})", info.describe()),
                    None => base_message,
                };

                StatsError::RateLimitExceeded {
                    rate_limit,
                    message,
                }
            }
            _ => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let Ok(limit) = u32::try_from(rate.limit) else {
            return None;
        };
        let Ok(remaining) = u32::try_from(rate.remaining) else {
            return None;
        };
        Some(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}

#[async_trait]
impl ContributionGateway for OctocrabContributionGateway {
    async fn repository(
        &self,
        identifier: &RepositoryIdentifier,
    ) -> Result<RepositoryHandle, StatsError> {
        let locator = RepositoryLocator::from_identifier(identifier)?;
        tracing::debug!(repository = %identifier, "resolving repository");

        let operation = format!("resolve repository {identifier}");
        let repository: ApiRepository =
            match self.client.get(locator.repository_path(), None::<&()>).await {
                Ok(repository) => repository,
                Err(error) if is_not_found(&error) => {
                    return Err(StatsError::Api {
                        message: format!(
                            "repository {identifier} was not found or is not visible to the token"
                        ),
                    });
                }
                Err(error) => {
                    return Err(self.map_error_with_rate_limit(&operation, &error).await);
                }
            };

        Ok(RepositoryHandle {
            locator,
            full_name: repository.full_name,
        })
    }

    async fn issues_created_by(
        &self,
        repository: &RepositoryHandle,
        query: &IssueQuery,
    ) -> Result<Vec<IssueSummary>, StatsError> {
        let since = query.since.to_query_value();
        let per_page = PAGE_SIZE.to_string();
        let params = [
            ("since", since.as_str()),
            ("state", "all"),
            ("creator", query.creator.as_str()),
            ("sort", "created"),
            ("direction", "desc"),
            ("per_page", per_page.as_str()),
        ];
        tracing::debug!(
            repository = %repository.locator.repository_path(),
            creator = %query.creator,
            since = %since,
            "listing issues"
        );

        let issues: Vec<ApiIssue> = self
            .fetch_all("list issues", repository.locator.issues_path(), &params)
            .await?;
        Ok(issues.into_iter().map(Into::into).collect())
    }

    async fn review_comments(
        &self,
        repository: &RepositoryHandle,
        query: &ReviewCommentQuery,
    ) -> Result<Vec<ReviewComment>, StatsError> {
        let since = query.since.to_query_value();
        let per_page = PAGE_SIZE.to_string();
        let params = [
            ("sort", "created"),
            ("direction", "desc"),
            ("since", since.as_str()),
            ("per_page", per_page.as_str()),
        ];
        tracing::debug!(
            repository = %repository.locator.repository_path(),
            since = %since,
            "listing review comments"
        );

        let comments: Vec<ApiReviewComment> = self
            .fetch_all(
                "list review comments",
                repository.locator.review_comments_path(),
                &params,
            )
            .await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
