//! One statistics run, from list files to CSV report.

use crate::config::StatsConfig;
use crate::error::StatsError;
use crate::github::{OctocrabContributionGateway, PersonalAccessToken};
use crate::progress::{ProgressEvent, ProgressSink};
use crate::report::write_report_file;
use crate::roster::{load_repositories, load_users};
use crate::stats::ContributionStats;

/// Runs the statistics collection described by `config`.
///
/// Both list files are read before any remote call, and the report is only
/// written once both passes have completed.
///
/// # Errors
///
/// Returns the first configuration, I/O, or GitHub failure encountered. No
/// report file is created in that case.
pub async fn run(config: &StatsConfig, progress: &dyn ProgressSink) -> Result<(), StatsError> {
    let repositories = load_repositories(config.require_repos_list_path()?)?;
    let users = load_users(config.require_users_path()?)?;
    let output_path = config.require_output_path()?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let api_base = config.api_base()?;

    progress.emit(ProgressEvent::RepositoriesLoaded {
        repositories: repositories.clone(),
    });
    progress.emit(ProgressEvent::UsersLoaded {
        users: users.clone(),
    });

    let window = config.time_window();
    let cutoff = window.cutoff();
    tracing::debug!(
        days = window.days(),
        cutoff = %cutoff.to_query_value(),
        repositories = repositories.len(),
        users = users.len(),
        "starting collection"
    );

    let gateway = OctocrabContributionGateway::for_token(&token, &api_base)?;
    let summary = ContributionStats::new(&gateway, progress)
        .collect(&repositories, &users, cutoff)
        .await?;

    write_report_file(output_path, &summary)
}
