//! Gateways for loading contribution data through Octocrab.
//!
//! The trait is the seam between the aggregators and GitHub: tests drive the
//! aggregators with a mock, while the Octocrab implementation issues real
//! HTTP requests. Every listing returns the items of all pages, so callers
//! never handle page tokens.

mod client;
mod contributions;
mod error_mapping;

pub use contributions::OctocrabContributionGateway;

use async_trait::async_trait;

use crate::error::StatsError;
use crate::github::models::{IssueSummary, RepositoryHandle, ReviewComment};
use crate::roster::{RepositoryIdentifier, UserLogin};
use crate::window::Cutoff;

/// Items requested per page for every listing.
pub const PAGE_SIZE: u8 = 100;

/// Filter for the per-user issues listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery {
    /// Only issues opened by this login.
    pub creator: UserLogin,
    /// Lower bound passed as `since`.
    pub since: Cutoff,
}

/// Filter for the repository-wide review comments listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewCommentQuery {
    /// Lower bound passed as `since`.
    pub since: Cutoff,
}

/// Gateway that can answer the queries a statistics run needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContributionGateway: Send + Sync {
    /// Resolve an identifier to a repository GitHub knows about.
    async fn repository(
        &self,
        identifier: &RepositoryIdentifier,
    ) -> Result<RepositoryHandle, StatsError>;

    /// List issues and pull requests in any state opened by the query's
    /// creator, newest first.
    async fn issues_created_by(
        &self,
        repository: &RepositoryHandle,
        query: &IssueQuery,
    ) -> Result<Vec<IssueSummary>, StatsError>;

    /// List review comments on any pull request of the repository, newest
    /// first.
    async fn review_comments(
        &self,
        repository: &RepositoryHandle,
        query: &ReviewCommentQuery,
    ) -> Result<Vec<ReviewComment>, StatsError>;
}
