//! GitHub access for contribution statistics.
//!
//! This module wraps Octocrab to resolve repositories, list the issues and
//! pull requests a user opened, and list review comments. Errors are mapped
//! into [`crate::error::StatsError`] variants so callers never see Octocrab
//! internals.

pub mod gateway;
pub mod locator;
pub mod models;
pub mod rate_limit;

pub use gateway::{
    ContributionGateway, IssueQuery, OctocrabContributionGateway, PAGE_SIZE, ReviewCommentQuery,
};
pub use locator::{
    DEFAULT_API_URL, PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner,
    parse_api_base,
};
pub use models::{IssueSummary, RepositoryHandle, ReviewComment};
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::MockContributionGateway;
