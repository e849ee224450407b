//! Pull request pass: opened and merged counts per user.

use crate::error::StatsError;
use crate::github::{ContributionGateway, IssueQuery, IssueSummary};
use crate::progress::{ProgressEvent, ProgressSink};
use crate::roster::{RepositoryIdentifier, UserLogin};
use crate::window::Cutoff;

use super::PullRequestTally;

/// Which counter a pull request lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestOutcome {
    /// Still open, or closed without a close timestamp.
    Opened,
    /// Closed with a close timestamp. Closed-unmerged pull requests are
    /// counted here too.
    Merged,
}

/// Classifies a listed issue.
///
/// Returns `None` for plain issues, which are never counted.
///
/// ```
/// use contrib_stats::github::IssueSummary;
/// use contrib_stats::stats::{PullRequestOutcome, classify};
///
/// let pull = IssueSummary {
///     is_pull_request: true,
///     state: Some("closed".to_owned()),
///     closed_at: Some("2025-01-02T00:00:00Z".to_owned()),
///     ..IssueSummary::default()
/// };
/// assert_eq!(classify(&pull), Some(PullRequestOutcome::Merged));
/// ```
#[must_use]
pub fn classify(issue: &IssueSummary) -> Option<PullRequestOutcome> {
    if !issue.is_pull_request {
        return None;
    }
    if issue.is_closed() {
        Some(PullRequestOutcome::Merged)
    } else {
        Some(PullRequestOutcome::Opened)
    }
}

/// Counts the pull requests each user opened in each repository since
/// `cutoff`.
///
/// Issues one listing per repository and user.
///
/// # Errors
///
/// Propagates the first gateway failure.
pub async fn collect<Gateway>(
    client: &Gateway,
    progress: &dyn ProgressSink,
    repositories: &[RepositoryIdentifier],
    users: &[UserLogin],
    cutoff: Cutoff,
) -> Result<PullRequestTally, StatsError>
where
    Gateway: ContributionGateway + ?Sized,
{
    progress.emit(ProgressEvent::CollectingPullRequests);
    let mut tally = PullRequestTally::zeroed(users);

    for identifier in repositories {
        let repository = client.repository(identifier).await?;
        let mut counted = 0_usize;

        for user in users {
            let query = IssueQuery {
                creator: user.clone(),
                since: cutoff,
            };
            let issues = client.issues_created_by(&repository, &query).await?;
            for outcome in issues.iter().filter_map(classify) {
                tally.record(user, outcome);
                counted += 1;
            }
        }

        tracing::info!(repository = %identifier, pull_requests = counted, "pull requests counted");
    }

    Ok(tally)
}
