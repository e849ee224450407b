//! Data models for the GitHub payloads the statistics run consumes.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into public domain types.

use serde::Deserialize;

use super::locator::RepositoryLocator;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// A repository that GitHub confirmed exists and is visible to the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    /// Owner and name used to build API paths.
    pub locator: RepositoryLocator,
    /// `owner/name` as reported by GitHub (case may differ from the input).
    pub full_name: Option<String>,
}

/// Issue or pull request as returned by the issues listing.
///
/// GitHub models pull requests as issues; `is_pull_request` tells the two
/// apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueSummary {
    /// Issue number.
    pub number: u64,
    /// Author login if present.
    pub author: Option<String>,
    /// State (`open` or `closed`).
    pub state: Option<String>,
    /// True when the issue carries a `pull_request` link.
    pub is_pull_request: bool,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: Option<String>,
    /// Close timestamp (ISO 8601 format), absent while open.
    pub closed_at: Option<String>,
}

impl IssueSummary {
    /// Returns true when the issue is closed and has a close timestamp.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.as_deref() == Some("closed") && self.closed_at.is_some()
    }
}

/// Pull request review comment (distinct from issue comments).
///
/// Review comments are attached to specific lines in a pull request diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewComment {
    /// Comment identifier.
    pub id: u64,
    /// Author login.
    pub author: Option<String>,
    /// API URL of the pull request the comment belongs to.
    pub pull_request_url: Option<String>,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) full_name: Option<String>,
}

/// Marker object present on issues that are pull requests; only its
/// presence is inspected.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequestLink {}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiIssue {
    pub(crate) number: u64,
    pub(crate) user: Option<ApiUser>,
    pub(crate) state: Option<String>,
    pub(crate) pull_request: Option<ApiPullRequestLink>,
    pub(crate) created_at: Option<String>,
    pub(crate) closed_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReviewComment {
    pub(crate) id: u64,
    pub(crate) user: Option<ApiUser>,
    pub(crate) pull_request_url: Option<String>,
    pub(crate) created_at: Option<String>,
}

impl From<ApiIssue> for IssueSummary {
    fn from(value: ApiIssue) -> Self {
        Self {
            number: value.number,
            author: value.user.and_then(|user| user.login),
            state: value.state,
            is_pull_request: value.pull_request.is_some(),
            created_at: value.created_at,
            closed_at: value.closed_at,
        }
    }
}

impl From<ApiReviewComment> for ReviewComment {
    fn from(value: ApiReviewComment) -> Self {
        Self {
            id: value.id,
            author: value.user.and_then(|user| user.login),
            pull_request_url: value.pull_request_url,
            created_at: value.created_at,
        }
    }
}
