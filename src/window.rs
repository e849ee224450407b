//! Trailing time window and the cutoff instant derived from it.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Default window length, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// A trailing window of whole days ending at run start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    days: u32,
}

impl TimeWindow {
    /// Creates a window spanning `days` days.
    #[must_use]
    pub const fn from_days(days: u32) -> Self {
        Self { days }
    }

    /// Window length in days.
    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Resolves the window against `now`.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use contrib_stats::window::TimeWindow;
    ///
    /// let now = Utc.with_ymd_and_hms(2025, 3, 31, 12, 0, 0).unwrap();
    /// let cutoff = TimeWindow::from_days(30).cutoff_from(now);
    /// assert_eq!(cutoff.to_query_value(), "2025-03-01T12:00:00Z");
    /// ```
    #[must_use]
    pub fn cutoff_from(&self, now: DateTime<Utc>) -> Cutoff {
        Cutoff(now - Duration::days(i64::from(self.days)))
    }

    /// Resolves the window against the current time.
    #[must_use]
    pub fn cutoff(&self) -> Cutoff {
        self.cutoff_from(Utc::now())
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::from_days(DEFAULT_WINDOW_DAYS)
    }
}

/// Lower bound for the `since` filter on every query of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cutoff(DateTime<Utc>);

impl Cutoff {
    /// Wraps an absolute instant.
    #[must_use]
    pub const fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// The instant itself.
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// RFC 3339 rendering accepted by the GitHub `since` parameter.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
