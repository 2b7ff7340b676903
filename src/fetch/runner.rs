use std::path::Path;

use crate::error::AppError;

use super::store::{StoreOutcome, ensure_input_dir, write_if_absent};
use super::{Day, FetchOutcome, InputSource};

/// Per-run tally printed after the last day
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct FetchSummary {
    pub(crate) saved: usize,
    pub(crate) already_present: usize,
    pub(crate) not_available: usize,
}

/// Fetch `days` in order and store each new input under `input_dir`.
///
/// A 404 skips the day. Any other failure stops the run at that day.
pub(crate) fn run(
    source: &dyn InputSource,
    days: impl IntoIterator<Item = Day>,
    input_dir: &Path,
) -> Result<FetchSummary, AppError> {
    ensure_input_dir(input_dir)?;

    let mut summary = FetchSummary::default();
    for day in days {
        eprintln!("Fetching day {day}");
        let body = match source.fetch_day(day)? {
            FetchOutcome::Available(body) => body,
            FetchOutcome::NotFound => {
                eprintln!("Day {day} not available yet");
                summary.not_available += 1;
                continue;
            }
        };

        let path = day.input_path(input_dir);
        match write_if_absent(&path, &body)? {
            StoreOutcome::Written => summary.saved += 1,
            StoreOutcome::AlreadyExists => {
                eprintln!("{} already exists", path.display());
                summary.already_present += 1;
            }
        }
    }

    eprintln!(
        "Saved {}, already present {}, not available {}",
        summary.saved, summary.already_present, summary.not_available
    );
    Ok(summary)
}
