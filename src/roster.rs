//! Repository and user lists read from line-delimited text files.
//!
//! Each non-blank line is one identifier after surrounding whitespace is
//! trimmed. File order is kept. Identifiers are not validated here; a
//! malformed repository identifier is only rejected when the gateway tries
//! to resolve it.

use std::borrow::Borrow;
use std::fmt;
use std::fs;

use camino::Utf8Path;

use crate::error::StatsError;

/// A repository named as `owner/name`, exactly as listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryIdentifier(String);

impl RepositoryIdentifier {
    /// Wraps an identifier without validating it.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RepositoryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contributor account login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserLogin(String);

impl UserLogin {
    /// Wraps a login without validating it.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the login.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for UserLogin {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Loads the repository list.
///
/// # Errors
///
/// Returns [`StatsError::Io`] when the file is missing or unreadable.
pub fn load_repositories(path: &Utf8Path) -> Result<Vec<RepositoryIdentifier>, StatsError> {
    let contents = read_list(path)?;
    Ok(parse_lines(&contents)
        .map(RepositoryIdentifier::new)
        .collect())
}

/// Loads the user list, keeping the first occurrence of repeated logins.
///
/// # Errors
///
/// Returns [`StatsError::Io`] when the file is missing or unreadable.
pub fn load_users(path: &Utf8Path) -> Result<Vec<UserLogin>, StatsError> {
    let contents = read_list(path)?;
    Ok(parse_users(&contents))
}

fn read_list(path: &Utf8Path) -> Result<String, StatsError> {
    fs::read_to_string(path).map_err(|error| StatsError::Io {
        message: format!("failed to read list file '{path}': {error}"),
    })
}

fn parse_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

fn parse_users(contents: &str) -> Vec<UserLogin> {
    let mut users: Vec<UserLogin> = Vec::new();
    for line in parse_lines(contents) {
        if users.iter().all(|user| user.as_str() != line) {
            users.push(UserLogin::new(line));
        }
    }
    users
}
