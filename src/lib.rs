//! Per-user GitHub contribution statistics.
//!
//! The library reads a list of repositories and a list of users, counts the
//! pull requests each user opened or merged and the review comments they
//! wrote within a trailing window of days, and writes the counts as a CSV
//! report. GitHub is reached through Octocrab behind the
//! [`github::ContributionGateway`] trait.

pub mod app;
pub mod config;
pub mod error;
pub mod github;
pub mod progress;
pub mod report;
pub mod roster;
pub mod stats;
pub mod window;

pub use app::run;
pub use config::StatsConfig;
pub use error::StatsError;
pub use github::{ContributionGateway, OctocrabContributionGateway, PersonalAccessToken};
pub use progress::{NoopProgressSink, ProgressEvent, ProgressSink, StdoutProgressSink};
pub use roster::{RepositoryIdentifier, UserLogin};
pub use stats::{ContributionStats, ContributionSummary};
pub use window::{Cutoff, TimeWindow};
