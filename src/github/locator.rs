//! Identity wrappers and API path construction for repository queries.

use url::Url;

use crate::error::StatsError;
use crate::roster::RepositoryIdentifier;

/// Public GitHub API base used when no other base is configured.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, StatsError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StatsError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Parses and normalises an API base URL.
///
/// A trailing slash is removed so that `https://ghe.example.com/api/v3/`
/// and `https://ghe.example.com/api/v3` address the same endpoints.
///
/// # Errors
///
/// Returns `StatsError::InvalidUrl` when the input is not an absolute
/// `http` or `https` URL.
pub fn parse_api_base(input: &str) -> Result<Url, StatsError> {
    let parsed =
        Url::parse(input.trim()).map_err(|error| StatsError::InvalidUrl(error.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(StatsError::InvalidUrl(format!(
            "unsupported scheme `{}`",
            parsed.scheme()
        )));
    }

    let mut normalised = parsed;
    let trimmed_path = normalised.path().trim_end_matches('/').to_owned();
    normalised.set_path(&trimmed_path);
    Ok(normalised)
}

/// Repository addressed by owner and name.
///
/// # Example
///
/// ```
/// use contrib_stats::github::RepositoryLocator;
/// use contrib_stats::roster::RepositoryIdentifier;
///
/// let identifier = RepositoryIdentifier::new("octo/repo");
/// let locator = RepositoryLocator::from_identifier(&identifier)
///     .expect("owner/name should resolve");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.repository().as_str(), "repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Splits an `owner/name` identifier into a locator.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::InvalidRepository` unless the identifier has
    /// exactly two non-empty, slash-separated segments.
    pub fn from_identifier(identifier: &RepositoryIdentifier) -> Result<Self, StatsError> {
        let invalid = || StatsError::InvalidRepository {
            identifier: identifier.as_str().to_owned(),
        };

        let mut segments = identifier.as_str().split('/');
        let owner = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        let name = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        if segments.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            owner: RepositoryOwner(owner.to_owned()),
            repository: RepositoryName(name.to_owned()),
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    pub(crate) fn repository_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    pub(crate) fn issues_path(&self) -> String {
        format!("{}/issues", self.repository_path())
    }

    pub(crate) fn review_comments_path(&self) -> String {
        format!("{}/pulls/comments", self.repository_path())
    }
}
