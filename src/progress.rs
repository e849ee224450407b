//! Progress events and the sinks that announce them.
//!
//! A run reports its stages to the operator as plain lines on stdout. The
//! statistics code only sees the [`ProgressSink`] trait, so tests can record
//! events and library callers can silence them.

use std::io::{self, Write};

use crate::roster::{RepositoryIdentifier, UserLogin};

/// A stage of a statistics run worth telling the operator about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The repository list was loaded.
    RepositoriesLoaded {
        /// Repositories in file order.
        repositories: Vec<RepositoryIdentifier>,
    },
    /// The user list was loaded.
    UsersLoaded {
        /// Users in file order.
        users: Vec<UserLogin>,
    },
    /// The pull request pass is starting.
    CollectingPullRequests,
    /// The review comment pass is starting.
    CollectingReviewComments,
}

impl ProgressEvent {
    /// Operator-facing text for the event.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::RepositoriesLoaded { repositories } => format!(
                "Getting stats for the following repositories: {}",
                join(repositories.iter().map(RepositoryIdentifier::as_str))
            ),
            Self::UsersLoaded { users } => format!(
                "Getting stats for the following users: {}",
                join(users.iter().map(UserLogin::as_str))
            ),
            Self::CollectingPullRequests => "Collecting Pull Request stats...".to_owned(),
            Self::CollectingReviewComments => {
                "Collecting Pull Request Comments stats...".to_owned()
            }
        }
    }
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

/// A sink that can announce progress events.
pub trait ProgressSink: Send + Sync {
    /// Announces a progress event.
    fn emit(&self, event: ProgressEvent);
}

/// Progress sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn emit(&self, _event: ProgressEvent) {}
}

/// Writes each event as one line on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutProgressSink;

impl ProgressSink for StdoutProgressSink {
    fn emit(&self, event: ProgressEvent) {
        if let Err(error) = writeln!(io::stdout().lock(), "{}", event.message()) {
            tracing::debug!(%error, "failed to write progress line");
        }
    }
}
