//! Builders for issue and review comment fixtures.
//!
//! # Examples
//!
//! ```
//! use contrib_stats::github::models::test_support::{open_pull_request, review_comment};
//!
//! let pull = open_pull_request(1, "alice");
//! assert!(pull.is_pull_request);
//!
//! let comment = review_comment(10, "bob");
//! assert_eq!(comment.author.as_deref(), Some("bob"));
//! ```

use super::{IssueSummary, ReviewComment};

/// Close timestamp used by [`closed_pull_request`].
pub const CLOSED_AT: &str = "2025-01-02T00:00:00Z";

/// An open pull request authored by `author`.
#[must_use]
pub fn open_pull_request(number: u64, author: &str) -> IssueSummary {
    IssueSummary {
        number,
        author: Some(author.to_owned()),
        state: Some("open".to_owned()),
        is_pull_request: true,
        created_at: Some("2025-01-01T00:00:00Z".to_owned()),
        closed_at: None,
    }
}

/// A closed pull request with a close timestamp.
///
/// ```
/// use contrib_stats::github::models::test_support::closed_pull_request;
///
/// assert!(closed_pull_request(2, "alice").is_closed());
/// ```
#[must_use]
pub fn closed_pull_request(number: u64, author: &str) -> IssueSummary {
    IssueSummary {
        state: Some("closed".to_owned()),
        closed_at: Some(CLOSED_AT.to_owned()),
        ..open_pull_request(number, author)
    }
}

/// A plain issue with no pull request link.
#[must_use]
pub fn plain_issue(number: u64, author: &str) -> IssueSummary {
    IssueSummary {
        is_pull_request: false,
        ..open_pull_request(number, author)
    }
}

/// A review comment written by `author`.
#[must_use]
pub fn review_comment(id: u64, author: &str) -> ReviewComment {
    ReviewComment {
        id,
        author: Some(author.to_owned()),
        ..Default::default()
    }
}
