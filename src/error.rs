//! Error type shared by every stage of a statistics run.

use thiserror::Error;

use crate::github::rate_limit::RateLimitInfo;

/// Errors surfaced while loading inputs, talking to GitHub, or writing the
/// report.
///
/// Any error aborts the run; no partial report is produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Configuration could not be loaded or a required value is missing.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The API base URL could not be parsed.
    #[error("API URL is invalid: {0}")]
    InvalidUrl(String),

    /// A repository identifier is not in `owner/name` form.
    #[error("repository identifier must be owner/name, got `{identifier}`")]
    InvalidRepository {
        /// The identifier as read from the repository list.
        identifier: String,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if it could be fetched.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// Reading an input list or writing the report failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
