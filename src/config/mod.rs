//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.contrib-stats.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `CONTRIB_STATS_TOKEN`,
//!    `CONTRIB_STATS_SINCE`, and so on, or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--repos_list_path`, `--users_path`,
//!    `--since`, `--token`, `--output_path`
//!
//! The underscore flag spellings are rewritten to their hyphenated forms by
//! [`normalise_flag_spellings`] before ortho-config parses them, so both
//! `--users_path` and `--users-path` are accepted.
//!
//! # Configuration File
//!
//! ```toml
//! repos_list_path = "repos.txt"
//! users_path = "users.txt"
//! since = 30
//! token = "ghp_example"
//! output_path = "stats.csv"
//! api_url = "https://ghe.example.com/api/v3"
//! ```

use std::env;
use std::ffi::OsString;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::StatsError;
use crate::github::{DEFAULT_API_URL, parse_api_base};
use crate::window::{DEFAULT_WINDOW_DAYS, TimeWindow};

/// Underscore long flags and the hyphenated spelling ortho-config parses.
const UNDERSCORE_FLAGS: [(&str, &str); 4] = [
    ("--repos_list_path", "--repos-list-path"),
    ("--users_path", "--users-path"),
    ("--output_path", "--output-path"),
    ("--api_url", "--api-url"),
];

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use contrib_stats::StatsConfig;
///
/// let config = StatsConfig::load_from_args(std::env::args_os())
///     .expect("failed to load configuration");
/// let users = config.require_users_path().expect("user list required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CONTRIB_STATS",
    discovery(
        dotfile_name = ".contrib-stats.toml",
        config_file_name = "contrib-stats.toml",
        app_name = "contrib-stats"
    )
)]
pub struct StatsConfig {
    /// File listing one `owner/name` repository per line.
    ///
    /// Can be provided via:
    /// - CLI: `--repos_list_path <PATH>`
    /// - Environment: `CONTRIB_STATS_REPOS_LIST_PATH`
    /// - Config file: `repos_list_path = "..."`
    #[ortho_config(cli_long = "repos-list-path")]
    pub repos_list_path: Option<String>,

    /// File listing one GitHub login per line.
    ///
    /// Can be provided via:
    /// - CLI: `--users_path <PATH>`
    /// - Environment: `CONTRIB_STATS_USERS_PATH`
    /// - Config file: `users_path = "..."`
    #[ortho_config(cli_long = "users-path")]
    pub users_path: Option<String>,

    /// Length of the trailing window, in days.
    ///
    /// Defaults to 30.
    #[ortho_config()]
    pub since: u32,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>`
    /// - Environment: `CONTRIB_STATS_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config()]
    pub token: Option<String>,

    /// Destination of the CSV report.
    ///
    /// Can be provided via:
    /// - CLI: `--output_path <PATH>`
    /// - Environment: `CONTRIB_STATS_OUTPUT_PATH`
    /// - Config file: `output_path = "..."`
    #[ortho_config(cli_long = "output-path")]
    pub output_path: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise hosts.
    ///
    /// Defaults to `https://api.github.com`.
    #[ortho_config(cli_long = "api-url")]
    pub api_url: String,

    /// Enables debug logging on stderr.
    ///
    /// Ignored when `RUST_LOG` is set. Environment variable
    /// `CONTRIB_STATS_VERBOSE` is not supported because `ortho_config` does
    /// not load boolean values from the environment.
    #[ortho_config(cli_short = 'v')]
    pub verbose: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            repos_list_path: None,
            users_path: None,
            since: DEFAULT_WINDOW_DAYS,
            token: None,
            output_path: None,
            api_url: DEFAULT_API_URL.to_owned(),
            verbose: false,
        }
    }
}

impl StatsConfig {
    /// Loads configuration from `args`, accepting the underscore flag
    /// spellings as well as the hyphenated ones.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Configuration`] when ortho-config fails to parse
    /// arguments or load configuration files.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::load_from_iter(normalise_flag_spellings(args)).map_err(|error| {
            StatsError::Configuration {
                message: error.to_string(),
            }
        })
    }

    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, StatsError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(StatsError::MissingToken)
    }

    /// Returns the repository list path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Configuration`] when no path is configured.
    pub fn require_repos_list_path(&self) -> Result<&Utf8Path, StatsError> {
        require_path(
            self.repos_list_path.as_deref(),
            "repository list path is required (use --repos_list_path)",
        )
    }

    /// Returns the user list path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Configuration`] when no path is configured.
    pub fn require_users_path(&self) -> Result<&Utf8Path, StatsError> {
        require_path(
            self.users_path.as_deref(),
            "user list path is required (use --users_path)",
        )
    }

    /// Returns the report path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Configuration`] when no path is configured.
    pub fn require_output_path(&self) -> Result<&Utf8Path, StatsError> {
        require_path(
            self.output_path.as_deref(),
            "output path is required (use --output_path)",
        )
    }

    /// The configured trailing window.
    #[must_use]
    pub const fn time_window(&self) -> TimeWindow {
        TimeWindow::from_days(self.since)
    }

    /// Parses the configured API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidUrl`] when the value is not an `http` or
    /// `https` URL.
    pub fn api_base(&self) -> Result<Url, StatsError> {
        parse_api_base(&self.api_url)
    }
}

/// Rewrites `--repos_list_path`, `--users_path`, `--output_path` and
/// `--api_url` to their hyphenated spellings.
///
/// Both `--flag value` and `--flag=value` forms are handled. Every other
/// argument passes through unchanged, as do non-UTF-8 arguments.
///
/// # Example
///
/// ```
/// use contrib_stats::config::normalise_flag_spellings;
///
/// let args = normalise_flag_spellings(["contrib-stats", "--users_path=u.txt"]);
/// assert_eq!(args, ["contrib-stats", "--users-path=u.txt"]);
/// ```
pub fn normalise_flag_spellings<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| arg.to_str().and_then(hyphenated_spelling).map_or(arg, OsString::from))
        .collect()
}

fn hyphenated_spelling(arg: &str) -> Option<String> {
    let (flag, value) = arg
        .split_once('=')
        .map_or((arg, None), |(flag, value)| (flag, Some(value)));
    let (_, hyphenated) = UNDERSCORE_FLAGS
        .iter()
        .find(|(underscored, _)| *underscored == flag)?;
    Some(value.map_or_else(
        || (*hyphenated).to_owned(),
        |inline| format!("{hyphenated}={inline}"),
    ))
}

fn require_path<'config>(
    value: Option<&'config str>,
    message: &str,
) -> Result<&'config Utf8Path, StatsError> {
    value
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(Utf8Path::new)
        .ok_or_else(|| StatsError::Configuration {
            message: message.to_owned(),
        })
}

#[cfg(test)]
mod tests;
