//! Per-user contribution counters and the passes that fill them.
//!
//! Both tallies are created with a zeroed entry for every configured user
//! before any remote call, so a user with no activity still gets a row.
//! Counters only ever increase.

pub mod pull_requests;
pub mod review_comments;

use std::collections::HashMap;

use crate::error::StatsError;
use crate::github::ContributionGateway;
use crate::progress::ProgressSink;
use crate::roster::{RepositoryIdentifier, UserLogin};
use crate::window::Cutoff;

pub use pull_requests::{PullRequestOutcome, classify};

/// Pull requests opened by one user, split by outcome.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestCounts {
    /// Pull requests still open, or closed without a close timestamp.
    pub opened: u64,
    /// Pull requests closed with a close timestamp.
    pub merged: u64,
}

impl PullRequestCounts {
    /// Total pull requests counted for the user.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.opened + self.merged
    }

    fn record(&mut self, outcome: PullRequestOutcome) {
        match outcome {
            PullRequestOutcome::Opened => self.opened += 1,
            PullRequestOutcome::Merged => self.merged += 1,
        }
    }
}

/// Pull request counts for every configured user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestTally {
    counts: HashMap<UserLogin, PullRequestCounts>,
}

impl PullRequestTally {
    /// Creates a tally with zero counts for each user.
    #[must_use]
    pub fn zeroed(users: &[UserLogin]) -> Self {
        let counts = users
            .iter()
            .map(|user| (user.clone(), PullRequestCounts::default()))
            .collect();
        Self { counts }
    }

    /// Counts for `user`, or zero when the user is not configured.
    #[must_use]
    pub fn counts_for(&self, user: &UserLogin) -> PullRequestCounts {
        self.counts.get(user).copied().unwrap_or_default()
    }

    /// Sum of opened and merged over every user.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().map(PullRequestCounts::total).sum()
    }

    pub(crate) fn record(&mut self, user: &UserLogin, outcome: PullRequestOutcome) {
        if let Some(counts) = self.counts.get_mut(user) {
            counts.record(outcome);
        }
    }
}

/// Review comment counts for every configured user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTally {
    counts: HashMap<UserLogin, u64>,
}

impl CommentTally {
    /// Creates a tally with zero counts for each user.
    #[must_use]
    pub fn zeroed(users: &[UserLogin]) -> Self {
        let counts = users.iter().map(|user| (user.clone(), 0)).collect();
        Self { counts }
    }

    /// Comment count for `user`, or zero when the user is not configured.
    #[must_use]
    pub fn count_for(&self, user: &UserLogin) -> u64 {
        self.counts.get(user).copied().unwrap_or_default()
    }

    /// Increments the count of a configured author.
    ///
    /// Returns `false` and changes nothing when `author` is not configured.
    pub(crate) fn record(&mut self, author: &str) -> bool {
        match self.counts.get_mut(author) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }
}

/// One report line: a user and their counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionRow<'summary> {
    /// The user the counts belong to.
    pub user: &'summary UserLogin,
    /// Pull request counts.
    pub pull_requests: PullRequestCounts,
    /// Review comment count.
    pub comments: u64,
}

/// Both tallies for a run, with the users in load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionSummary {
    users: Vec<UserLogin>,
    pull_requests: PullRequestTally,
    comments: CommentTally,
}

impl ContributionSummary {
    /// Combines the two tallies for `users`.
    #[must_use]
    pub const fn new(
        users: Vec<UserLogin>,
        pull_requests: PullRequestTally,
        comments: CommentTally,
    ) -> Self {
        Self {
            users,
            pull_requests,
            comments,
        }
    }

    /// One row per configured user, in load order.
    pub fn rows(&self) -> impl Iterator<Item = ContributionRow<'_>> {
        self.users.iter().map(|user| ContributionRow {
            user,
            pull_requests: self.pull_requests.counts_for(user),
            comments: self.comments.count_for(user),
        })
    }

    /// The pull request tally.
    #[must_use]
    pub const fn pull_requests(&self) -> &PullRequestTally {
        &self.pull_requests
    }

    /// The review comment tally.
    #[must_use]
    pub const fn comments(&self) -> &CommentTally {
        &self.comments
    }
}

/// Runs both aggregation passes through a gateway.
pub struct ContributionStats<'client, Gateway>
where
    Gateway: ContributionGateway,
{
    client: &'client Gateway,
    progress: &'client dyn ProgressSink,
}

impl<'client, Gateway> ContributionStats<'client, Gateway>
where
    Gateway: ContributionGateway,
{
    /// Create a new statistics facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway, progress: &'client dyn ProgressSink) -> Self {
        Self { client, progress }
    }

    /// Runs the pull request pass and then the review comment pass.
    ///
    /// # Errors
    ///
    /// Propagates the first gateway failure; no partial summary is returned.
    pub async fn collect(
        &self,
        repositories: &[RepositoryIdentifier],
        users: &[UserLogin],
        cutoff: Cutoff,
    ) -> Result<ContributionSummary, StatsError> {
        let pull_requests =
            pull_requests::collect(self.client, self.progress, repositories, users, cutoff)
                .await?;
        let comments =
            review_comments::collect(self.client, self.progress, repositories, users, cutoff)
                .await?;
        Ok(ContributionSummary::new(
            users.to_vec(),
            pull_requests,
            comments,
        ))
    }
}
