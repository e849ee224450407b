//! When steps: run the statistics collection.

use contrib_stats::{NoopProgressSink, StatsConfig, StatsError};
use rstest_bdd_macros::when;

use super::contribution_stats_bdd_state::{
    REPORT_FILE, REPOS_FILE, StatsState, USERS_FILE, ensure_runtime_and_server, io_error,
};

#[when("the statistics run covers the last {days:u32} days")]
fn run_statistics(stats_state: &StatsState, days: u32) -> Result<(), StatsError> {
    let runtime =
        ensure_runtime_and_server(&stats_state.runtime, &stats_state.server).map_err(io_error)?;

    let config = StatsConfig {
        repos_list_path: Some(stats_state.workspace_file(REPOS_FILE)?.into_string()),
        users_path: Some(stats_state.workspace_file(USERS_FILE)?.into_string()),
        since: days,
        token: Some("test-token".to_owned()),
        output_path: Some(stats_state.workspace_file(REPORT_FILE)?.into_string()),
        api_url: stats_state.server_uri()?,
        verbose: false,
    };

    match runtime.block_on(contrib_stats::run(&config, &NoopProgressSink)) {
        Ok(()) => {
            drop(stats_state.error.take());
        }
        Err(error) => {
            stats_state.error.set(error);
        }
    }

    Ok(())
}
