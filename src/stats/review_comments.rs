//! Review comment pass: comments per configured author.

use crate::error::StatsError;
use crate::github::{ContributionGateway, ReviewCommentQuery};
use crate::progress::{ProgressEvent, ProgressSink};
use crate::roster::{RepositoryIdentifier, UserLogin};
use crate::window::Cutoff;

use super::CommentTally;

/// Counts review comments written by configured users since `cutoff`.
///
/// Issues one listing per repository. Comments by unlisted authors, or with
/// no author at all, are skipped.
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
) -> Result<CommentTally, StatsError>
where
    Gateway: ContributionGateway + ?Sized,
{
    progress.emit(ProgressEvent::CollectingReviewComments);
    let mut tally = CommentTally::zeroed(users);
    let query = ReviewCommentQuery { since: cutoff };

    for identifier in repositories {
        let repository = client.repository(identifier).await?;
        let comments = client.review_comments(&repository, &query).await?;

        let mut counted = 0_usize;
        for comment in &comments {
            match comment.author.as_deref() {
                Some(author) if tally.record(author) => counted += 1,
                Some(author) => tracing::debug!(%author, "skipping comment by unlisted author"),
                None => tracing::debug!(comment = comment.id, "skipping comment without author"),
            }
        }

        tracing::info!(
            repository = %identifier,
            listed = comments.len(),
            counted,
            "review comments counted"
        );
    }

    Ok(tally)
}
