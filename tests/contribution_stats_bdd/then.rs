//! Then steps: inspect the report file, the error, and the mock server.

use contrib_stats::StatsError;
use rstest_bdd_macros::then;

use super::contribution_stats_bdd_state::{REPORT_FILE, StatsState, assertion};

const HEADER: &str = "User,Opened PRs,Merged PRs,Comments";

fn read_report(stats_state: &StatsState) -> Result<Vec<String>, StatsError> {
    if let Some(error) = stats_state.error.with_ref(Clone::clone) {
        return Err(assertion(&format!("run failed unexpectedly: {error}")));
    }

    let path = stats_state.workspace_file(REPORT_FILE)?;
    let contents = std::fs::read_to_string(&path)
        .map_err(|error| assertion(&format!("failed to read {path}: {error}")))?;
    let mut lines = contents.lines().map(str::to_owned);

    match lines.next() {
        Some(header) if header == HEADER => Ok(lines.collect()),
        other => Err(assertion(&format!("unexpected header: {other:?}"))),
    }
}

#[then("the report has {count:u64} user rows")]
fn report_row_count(stats_state: &StatsState, count: u64) -> Result<(), StatsError> {
    let rows = read_report(stats_state)?;
    if rows.len() as u64 == count {
        Ok(())
    } else {
        Err(assertion(&format!(
            "expected {count} rows but found {}: {rows:?}",
            rows.len()
        )))
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the report row for {user} is {expected}")]
fn report_row(stats_state: &StatsState, user: String, expected: String) -> Result<(), StatsError> {
    let login = user.trim_matches('"');
    let expected_row = expected.trim_matches('"');
    let rows = read_report(stats_state)?;

    let row = rows
        .iter()
        .find(|row| row.split(',').next() == Some(login))
        .ok_or_else(|| assertion(&format!("no row for {login} in {rows:?}")))?;

    if row == expected_row {
        Ok(())
    } else {
        Err(assertion(&format!(
            "expected row {expected_row} but found {row}"
        )))
    }
}

#[then("the run fails with an authentication error")]
fn authentication_error(stats_state: &StatsState) -> Result<(), StatsError> {
    match stats_state.error.with_ref(Clone::clone) {
        Some(StatsError::Authentication { message }) if message.contains("Bad credentials") => {
            Ok(())
        }
        other => Err(assertion(&format!(
            "expected Authentication error, got {other:?}"
        ))),
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the run fails naming the file {file}")]
fn io_error_naming(stats_state: &StatsState, file: String) -> Result<(), StatsError> {
    let file_name = file.trim_matches('"');
    match stats_state.error.with_ref(Clone::clone) {
        Some(StatsError::Io { message }) if message.contains(file_name) => Ok(()),
        other => Err(assertion(&format!(
            "expected Io error naming {file_name}, got {other:?}"
        ))),
    }
}

#[then("no report file is written")]
fn no_report(stats_state: &StatsState) -> Result<(), StatsError> {
    let path = stats_state.workspace_file(REPORT_FILE)?;
    if path.exists() {
        Err(assertion(&format!("{path} should not exist")))
    } else {
        Ok(())
    }
}

#[then("no request reached GitHub")]
fn no_requests(stats_state: &StatsState) -> Result<(), StatsError> {
    let runtime = stats_state
        .runtime
        .get()
        .ok_or_else(|| assertion("runtime not initialised"))?;
    let received = stats_state
        .server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .ok_or_else(|| assertion("mock server not initialised"))?
        .ok_or_else(|| assertion("request recording disabled"))?;

    if received.is_empty() {
        Ok(())
    } else {
        Err(assertion(&format!(
            "expected no requests, got {}",
            received.len()
        )))
    }
}
