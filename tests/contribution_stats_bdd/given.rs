//! Given steps: list files and the mock GitHub API.

use contrib_stats::StatsError;
use rstest_bdd_macros::given;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use super::contribution_stats_bdd_state::{
    REPOS_FILE, StatsState, USERS_FILE, assertion, split_list,
};

fn write_list(stats_state: &StatsState, file: &str, items: &str) -> Result<(), StatsError> {
    let path = stats_state.workspace_file(file)?;
    let contents = split_list(items).join("\n");
    std::fs::write(&path, format!("{contents}\n"))
        .map_err(|error| assertion(&format!("failed to write {path}: {error}")))
}

fn pull_request(number: u64, user: &str, closed: bool) -> Value {
    let (state, closed_at) = if closed {
        ("closed", Some("2025-01-02T00:00:00Z"))
    } else {
        ("open", None)
    };
    json!({
        "number": number,
        "user": { "login": user },
        "state": state,
        "pull_request": { "url": format!("https://api.github.com/pulls/{number}") },
        "created_at": "2025-01-01T00:00:00Z",
        "closed_at": closed_at
    })
}

fn plain_issue(number: u64, user: &str) -> Value {
    json!({
        "number": number,
        "user": { "login": user },
        "state": "open",
        "created_at": "2025-01-01T00:00:00Z",
        "closed_at": null
    })
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a repository list containing {repos}")]
fn repository_list(stats_state: &StatsState, repos: String) -> Result<(), StatsError> {
    write_list(stats_state, REPOS_FILE, &repos)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a user list containing {users}")]
fn user_list(stats_state: &StatsState, users: String) -> Result<(), StatsError> {
    write_list(stats_state, USERS_FILE, &users)
}

#[given("the user list file is missing")]
fn user_list_missing(stats_state: &StatsState) -> Result<(), StatsError> {
    let path = stats_state.workspace_file(USERS_FILE)?;
    if path.exists() {
        return Err(assertion(&format!("{path} should not exist")));
    }
    Ok(())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("GitHub knows repository {repo}")]
fn known_repository(stats_state: &StatsState, repo: String) -> Result<(), StatsError> {
    let full_name = repo.trim_matches('"');
    let mock = Mock::given(method("GET"))
        .and(path(format!("/repos/{full_name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "full_name": full_name
        })));
    stats_state.mount(mock)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given(
    "{user} opened {open:u64} open and {closed:u64} closed pull requests and \
     {plain:u64} plain issues in {repo}"
)]
fn issues_by_user(
    stats_state: &StatsState,
    user: String,
    open: u64,
    closed: u64,
    plain: u64,
    repo: String,
) -> Result<(), StatsError> {
    let login = user.trim_matches('"');
    let full_name = repo.trim_matches('"');

    let mut issues = Vec::new();
    let mut number = 0_u64;
    for _ in 0..open {
        number += 1;
        issues.push(pull_request(number, login, false));
    }
    for _ in 0..closed {
        number += 1;
        issues.push(pull_request(number, login, true));
    }
    for _ in 0..plain {
        number += 1;
        issues.push(plain_issue(number, login));
    }

    let mock = Mock::given(method("GET"))
        .and(path(format!("/repos/{full_name}/issues")))
        .and(query_param("creator", login))
        .and(query_param("state", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(issues)));
    stats_state.mount(mock)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("the review comments in {repo} are written by {authors}")]
fn review_comments_by(
    stats_state: &StatsState,
    repo: String,
    authors: String,
) -> Result<(), StatsError> {
    let comments: Vec<Value> = split_list(&authors)
        .iter()
        .zip(1_u64..)
        .map(|(author, id)| json!({ "id": id, "user": { "login": author }, "body": "review" }))
        .collect();
    mount_review_comments(stats_state, repo.trim_matches('"'), comments)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("there are no review comments in {repo}")]
fn no_review_comments(stats_state: &StatsState, repo: String) -> Result<(), StatsError> {
    mount_review_comments(stats_state, repo.trim_matches('"'), Vec::new())
}

fn mount_review_comments(
    stats_state: &StatsState,
    repo: &str,
    comments: Vec<Value>,
) -> Result<(), StatsError> {
    let mock = Mock::given(method("GET"))
        .and(path(format!("/repos/{repo}/pulls/comments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(comments)));
    stats_state.mount(mock)
}

#[given("GitHub rejects the token")]
fn rejecting_server(stats_state: &StatsState) -> Result<(), StatsError> {
    let mock = Mock::given(method("GET")).respond_with(
        ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })),
    );
    stats_state.mount(mock)
}
