//! CSV report of per-user contribution counts.
//!
//! The header row is always written, so an empty user list still yields a
//! valid one-line file. Rows follow user load order.

use std::fs::File;
use std::io::{BufWriter, Write};

use camino::Utf8Path;
use serde::Serialize;

use crate::error::StatsError;
use crate::stats::{ContributionRow, ContributionSummary};

/// Column names of the report.
pub const HEADER: [&str; 4] = ["User", "Opened PRs", "Merged PRs", "Comments"];

#[derive(Debug, Serialize)]
struct ReportRow<'summary> {
    user: &'summary str,
    opened: u64,
    merged: u64,
    comments: u64,
}

impl<'summary> From<ContributionRow<'summary>> for ReportRow<'summary> {
    fn from(row: ContributionRow<'summary>) -> Self {
        Self {
            user: row.user.as_str(),
            opened: row.pull_requests.opened,
            merged: row.pull_requests.merged,
            comments: row.comments,
        }
    }
}

/// Writes the report as CSV to `writer`.
///
/// # Errors
///
/// Returns [`StatsError::Io`] if writing to the output fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    summary: &ContributionSummary,
) -> Result<(), StatsError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADER).map_err(|e| csv_error(&e))?;
    for row in summary.rows() {
        csv_writer
            .serialize(ReportRow::from(row))
            .map_err(|e| csv_error(&e))?;
    }
    csv_writer.flush().map_err(|e| StatsError::Io {
        message: format!("failed to flush report: {e}"),
    })
}

/// Creates (or truncates) `path` and writes the report into it.
///
/// # Errors
///
/// Returns [`StatsError::Io`] naming the path when the file cannot be
/// created or written.
pub fn write_report_file(path: &Utf8Path, summary: &ContributionSummary) -> Result<(), StatsError> {
    let file = File::create(path).map_err(|e| StatsError::Io {
        message: format!("failed to create output file '{path}': {e}"),
    })?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, summary)?;
    writer.flush().map_err(|e| StatsError::Io {
        message: format!("failed to flush output file '{path}': {e}"),
    })?;
    tracing::info!(%path, "report written");
    Ok(())
}

fn csv_error(error: &csv::Error) -> StatsError {
    StatsError::Io {
        message: format!("failed to write report row: {error}"),
    }
}
